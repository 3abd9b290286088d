//! 考试、题目与考试报告存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::candidate_positions::{
    Column as ApplicationColumn, Entity as Applications,
};
use crate::entity::candidates::{Column as CandidateColumn, Entity as Candidates};
use crate::entity::categories::{Column as CategoryColumn, Entity as Categories};
use crate::entity::exam_reports::{
    ActiveModel as ReportActiveModel, Column as ReportColumn, Entity as ExamReports,
};
use crate::entity::exams::{ActiveModel, Column, Entity as Exams, Model as ExamModel};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::entity::status::Entity as StatusEntity;
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{RecruitError, Result};
use crate::models::exams::{
    entities::{
        AnswerKey, AssignedExam, CandidateExamDetail, CandidateExamReport, CandidateQuestion,
        Exam, ExamDetail, ExamListItem, ExamReport, ExamReportWithCandidate,
        ExamResult, ExamSummary, ExamUpdate, NewExam, NewQuestion, Question, SubmittedAnswer,
    },
    scoring::score_answers,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::warn;

impl SeaOrmStorage {
    /// 创建考试，创建者与分类必须存在
    pub async fn create_exam_impl(&self, req: NewExam) -> Result<Exam> {
        if self.get_user_by_id_impl(req.created_by).await?.is_none() {
            return Err(RecruitError::not_found(format!(
                "User {} not found",
                req.created_by
            )));
        }
        self.ensure_category_exists(req.category_id).await?;

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            created_by: Set(req.created_by),
            category_id: Set(req.category_id),
            title: Set(req.title),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建考试失败: {e}")))?;

        Ok(result.into_exam())
    }

    pub async fn get_exam_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    pub async fn list_exams_impl(&self) -> Result<Vec<ExamListItem>> {
        let exams = Exams::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试列表失败: {e}")))?;

        self.exam_list_items(exams).await
    }

    /// 管理端考试详情：题目含答案，报告含候选人信息
    pub async fn get_exam_detail_impl(&self, id: i64) -> Result<Option<ExamDetail>> {
        let Some(exam) = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
        else {
            return Ok(None);
        };

        let Some(item) = self.exam_list_items(vec![exam]).await?.pop() else {
            return Ok(None);
        };
        let questions = self.list_questions(id).await?;

        let reports = ExamReports::find()
            .filter(ReportColumn::ExamId.eq(id))
            .order_by_desc(ReportColumn::ReportDate)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试报告失败: {e}")))?;

        let candidate_ids: Vec<i64> = reports.iter().map(|r| r.candidate_id).collect();
        let candidates: HashMap<i64, (Option<String>, String)> = if candidate_ids.is_empty() {
            HashMap::new()
        } else {
            Candidates::find()
                .filter(CandidateColumn::Id.is_in(candidate_ids))
                .all(&self.db)
                .await
                .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?
                .into_iter()
                .map(|c| (c.id, (c.full_name, c.email)))
                .collect()
        };

        let reports: Vec<ExamReportWithCandidate> = reports
            .into_iter()
            .map(|report| {
                let candidate = candidates.get(&report.candidate_id);
                ExamReportWithCandidate {
                    candidate_name: candidate.and_then(|(name, _)| name.clone()),
                    candidate_email: candidate.map(|(_, email)| email.clone()),
                    report: report.into_exam_report(),
                }
            })
            .collect();

        let total_completed = reports.iter().filter(|r| r.report.is_completed).count();
        Ok(Some(ExamDetail {
            exam: item,
            total_questions: questions.len(),
            total_assigned: reports.len(),
            total_completed,
            questions,
            reports,
        }))
    }

    pub async fn update_exam_impl(&self, id: i64, update: ExamUpdate) -> Result<Option<Exam>> {
        let Some(existing) = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
        else {
            return Ok(None);
        };
        self.ensure_category_exists(update.category_id).await?;

        let mut model: ActiveModel = existing.into();
        model.category_id = Set(update.category_id);
        model.title = Set(update.title);
        model.description = Set(update.description);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新考试失败: {e}")))?;

        Ok(Some(result.into_exam()))
    }

    /// 事务内依次删除报告、题目和考试，任一步失败整体回滚
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        let exists = Exams::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
            .is_some();
        if !exists {
            return Ok(false);
        }

        ExamReports::delete_many()
            .filter(ReportColumn::ExamId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除考试报告失败: {e}")))?;

        Questions::delete_many()
            .filter(QuestionColumn::ExamId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除考试题目失败: {e}")))?;

        let result = Exams::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除考试失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 事务内检查题目上限并插入，全部成功或全部回滚
    pub async fn add_questions_impl(
        &self,
        exam_id: i64,
        questions: Vec<NewQuestion>,
        max_questions: u64,
    ) -> Result<Vec<Question>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        let exists = Exams::find_by_id(exam_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
            .is_some();
        if !exists {
            return Err(RecruitError::not_found(format!("Exam {exam_id} not found")));
        }

        let current = Questions::find()
            .filter(QuestionColumn::ExamId.eq(exam_id))
            .count(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计题目数量失败: {e}")))?;
        let adding = questions.len() as u64;
        if current + adding > max_questions {
            return Err(RecruitError::validation(format!(
                "Exam already has {current} questions; adding {adding} would exceed the limit of {max_questions}"
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let mut inserted = Vec::with_capacity(questions.len());
        for question in questions {
            let model = QuestionActiveModel {
                exam_id: Set(exam_id),
                question_text: Set(question.question_text),
                option_a: Set(question.option_a),
                option_b: Set(question.option_b),
                option_c: Set(question.option_c),
                option_d: Set(question.option_d),
                answer_key: Set(question.answer_key.to_string()),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            };
            let result = model
                .insert(&txn)
                .await
                .map_err(|e| RecruitError::database_operation(format!("创建题目失败: {e}")))?;
            inserted.push(result.into_question());
        }

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(inserted)
    }

    pub async fn get_question_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    pub async fn update_question_impl(
        &self,
        id: i64,
        question: NewQuestion,
    ) -> Result<Option<Question>> {
        let Some(existing) = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询题目失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: QuestionActiveModel = existing.into();
        model.question_text = Set(question.question_text);
        model.option_a = Set(question.option_a);
        model.option_b = Set(question.option_b);
        model.option_c = Set(question.option_c);
        model.option_d = Set(question.option_d);
        model.answer_key = Set(question.answer_key.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新题目失败: {e}")))?;

        Ok(Some(result.into_question()))
    }

    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分配考试：建立未完成的考试报告，并把候选人全部应聘记录推进到考试状态
    pub async fn assign_exam_impl(
        &self,
        exam_id: i64,
        candidate_id: i64,
        exam_status_id: i64,
    ) -> Result<ExamReport> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        if Exams::find_by_id(exam_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
            .is_none()
        {
            return Err(RecruitError::not_found(format!("Exam {exam_id} not found")));
        }

        if Candidates::find_by_id(candidate_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?
            .is_none()
        {
            return Err(RecruitError::not_found(format!(
                "Candidate {candidate_id} not found"
            )));
        }

        let assigned = ExamReports::find()
            .filter(ReportColumn::ExamId.eq(exam_id))
            .filter(ReportColumn::CandidateId.eq(candidate_id))
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试报告失败: {e}")))?;
        if assigned.is_some() {
            return Err(RecruitError::conflict(format!(
                "Exam {exam_id} is already assigned to candidate {candidate_id}"
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let report = ReportActiveModel {
            exam_id: Set(exam_id),
            candidate_id: Set(candidate_id),
            score: Set(0.0),
            is_completed: Set(false),
            report_date: Set(now),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| RecruitError::database_operation(format!("创建考试报告失败: {e}")))?;

        let status_exists = StatusEntity::find_by_id(exam_status_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询状态失败: {e}")))?
            .is_some();
        if status_exists {
            Applications::update_many()
                .col_expr(
                    ApplicationColumn::StatusId,
                    sea_orm::sea_query::Expr::value(exam_status_id),
                )
                .filter(ApplicationColumn::CandidateId.eq(candidate_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    RecruitError::database_operation(format!("更新应聘状态失败: {e}"))
                })?;
        } else {
            warn!(
                "Exam status {} does not exist, applications of candidate {} keep their status",
                exam_status_id, candidate_id
            );
        }

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(report.into_exam_report())
    }

    /// 分配给候选人的考试，按考试创建时间倒序
    pub async fn list_candidate_exams_impl(&self, candidate_id: i64) -> Result<Vec<AssignedExam>> {
        let reports = ExamReports::find()
            .filter(ReportColumn::CandidateId.eq(candidate_id))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试报告失败: {e}")))?;
        if reports.is_empty() {
            return Ok(Vec::new());
        }

        let exam_ids: Vec<i64> = reports.iter().map(|r| r.exam_id).collect();
        let exams = Exams::find()
            .filter(Column::Id.is_in(exam_ids.clone()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?;

        let categories = self.category_names(exams.iter().map(|e| e.category_id)).await?;
        let counts = self.question_counts(&exam_ids).await?;
        let reports: HashMap<i64, _> = reports.into_iter().map(|r| (r.exam_id, r)).collect();

        Ok(exams
            .into_iter()
            .filter_map(|exam| {
                let report = reports.get(&exam.id)?;
                Some(AssignedExam {
                    category: categories.get(&exam.category_id).cloned(),
                    question_count: counts.get(&exam.id).copied().unwrap_or(0),
                    score: report.score,
                    is_completed: report.is_completed,
                    report_date: crate::entity::to_datetime(report.report_date),
                    exam: exam.into_exam(),
                })
            })
            .collect())
    }

    /// 候选人考试详情，题目不含答案
    pub async fn get_candidate_exam_impl(
        &self,
        candidate_id: i64,
        exam_id: i64,
    ) -> Result<CandidateExamDetail> {
        if self.get_candidate_by_id_impl(candidate_id).await?.is_none() {
            return Err(RecruitError::not_found(format!(
                "Candidate {candidate_id} not found"
            )));
        }

        let attempts = ExamReports::find()
            .filter(ReportColumn::CandidateId.eq(candidate_id))
            .filter(ReportColumn::ExamId.eq(exam_id))
            .order_by_desc(ReportColumn::ReportDate)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试报告失败: {e}")))?;
        if attempts.is_empty() {
            return Err(RecruitError::not_found(
                "This exam is not assigned to this candidate",
            ));
        }

        let Some(exam) = Exams::find_by_id(exam_id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
        else {
            return Err(RecruitError::not_found(format!("Exam {exam_id} not found")));
        };
        let Some(exam) = self.exam_list_items(vec![exam]).await?.pop() else {
            return Err(RecruitError::not_found(format!("Exam {exam_id} not found")));
        };

        let questions: Vec<CandidateQuestion> = self
            .list_questions(exam_id)
            .await?
            .into_iter()
            .map(CandidateQuestion::from)
            .collect();
        let is_completed = attempts.iter().any(|r| r.is_completed);

        Ok(CandidateExamDetail {
            exam,
            total_questions: questions.len(),
            questions,
            previous_attempts: attempts.into_iter().map(|r| r.into_exam_report()).collect(),
            is_completed,
        })
    }

    /// 提交答卷：校验候选人、考试、分配关系和完成状态，评分后标记完成
    pub async fn submit_exam_impl(
        &self,
        candidate_id: i64,
        exam_id: i64,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<ExamResult> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        if Candidates::find_by_id(candidate_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?
            .is_none()
        {
            return Err(RecruitError::not_found(format!(
                "Candidate {candidate_id} not found"
            )));
        }

        if Exams::find_by_id(exam_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
            .is_none()
        {
            return Err(RecruitError::not_found(format!("Exam {exam_id} not found")));
        }

        let Some(report) = ExamReports::find()
            .filter(ReportColumn::CandidateId.eq(candidate_id))
            .filter(ReportColumn::ExamId.eq(exam_id))
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试报告失败: {e}")))?
        else {
            return Err(RecruitError::not_found(
                "This exam is not assigned to this candidate",
            ));
        };
        if report.is_completed {
            return Err(RecruitError::conflict("This exam has already been completed"));
        }

        let answer_keys = Self::answer_keys(&txn, exam_id).await?;
        if answer_keys.is_empty() {
            return Err(RecruitError::validation("No questions found for this exam"));
        }

        let score = score_answers(&answer_keys, &answers);
        let now = chrono::Utc::now().timestamp();
        let report_id = report.id;

        let mut model: ReportActiveModel = report.into();
        model.score = Set(score.percentage);
        model.is_completed = Set(true);
        model.report_date = Set(now);
        model.updated_at = Set(now);
        model
            .update(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新考试报告失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(ExamResult {
            report_id,
            candidate_id,
            exam_id,
            total_questions: score.total,
            correct_answers: score.correct,
            score: score.percentage,
            is_completed: true,
            submission_date: crate::entity::to_datetime(now),
        })
    }

    /// 候选人的考试报告，可按考试过滤，按报告时间倒序
    pub async fn list_candidate_exam_reports_impl(
        &self,
        candidate_id: i64,
        exam_id: Option<i64>,
    ) -> Result<Vec<CandidateExamReport>> {
        let mut select = ExamReports::find().filter(ReportColumn::CandidateId.eq(candidate_id));
        if let Some(exam_id) = exam_id {
            select = select.filter(ReportColumn::ExamId.eq(exam_id));
        }
        let reports = select
            .order_by_desc(ReportColumn::ReportDate)
            .order_by_desc(ReportColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试报告失败: {e}")))?;
        if reports.is_empty() {
            return Ok(Vec::new());
        }

        let exam_ids: Vec<i64> = reports.iter().map(|r| r.exam_id).collect();
        let exams: HashMap<i64, ExamModel> = Exams::find()
            .filter(Column::Id.is_in(exam_ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试失败: {e}")))?
            .into_iter()
            .map(|e| (e.id, e))
            .collect();
        let categories = self.category_names(exams.values().map(|e| e.category_id)).await?;

        Ok(reports
            .into_iter()
            .map(|report| {
                let exam = exams.get(&report.exam_id);
                CandidateExamReport {
                    exam_title: exam.map(|e| e.title.clone()).unwrap_or_else(|| "-".into()),
                    exam_category: exam.and_then(|e| categories.get(&e.category_id).cloned()),
                    report: report.into_exam_report(),
                }
            })
            .collect())
    }

    /// 已完成考试的平均分与数量
    pub async fn exam_summary_impl(&self, candidate_id: i64) -> Result<ExamSummary> {
        let scores: Vec<f64> = ExamReports::find()
            .select_only()
            .column(ReportColumn::Score)
            .filter(ReportColumn::CandidateId.eq(candidate_id))
            .filter(ReportColumn::IsCompleted.eq(true))
            .into_tuple::<f64>()
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计考试成绩失败: {e}")))?;

        let total_exams = scores.len() as u64;
        let average_score =
            (total_exams > 0).then(|| scores.iter().sum::<f64>() / total_exams as f64);

        Ok(ExamSummary {
            average_score,
            total_exams,
        })
    }

    async fn ensure_category_exists(&self, category_id: i64) -> Result<()> {
        let exists = Categories::find_by_id(category_id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试分类失败: {e}")))?
            .is_some();
        if exists {
            Ok(())
        } else {
            Err(RecruitError::not_found(format!(
                "Category {category_id} not found"
            )))
        }
    }

    async fn list_questions(&self, exam_id: i64) -> Result<Vec<Question>> {
        let rows = Questions::find()
            .filter(QuestionColumn::ExamId.eq(exam_id))
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_question()).collect())
    }

    async fn answer_keys<C: ConnectionTrait>(
        conn: &C,
        exam_id: i64,
    ) -> Result<HashMap<i64, AnswerKey>> {
        let rows = Questions::find()
            .filter(QuestionColumn::ExamId.eq(exam_id))
            .all(conn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询题目失败: {e}")))?;

        // 答案无法识别的题目不参与评分
        Ok(rows
            .into_iter()
            .filter_map(|m| m.parsed_answer_key().map(|key| (m.id, key)))
            .collect())
    }

    /// 每场考试的题目数量
    async fn question_counts(&self, exam_ids: &[i64]) -> Result<HashMap<i64, u64>> {
        if exam_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64)> = Questions::find()
            .select_only()
            .column(QuestionColumn::ExamId)
            .column_as(QuestionColumn::Id.count(), "question_count")
            .filter(QuestionColumn::ExamId.is_in(exam_ids.to_vec()))
            .group_by(QuestionColumn::ExamId)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("统计题目数量失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(exam_id, count)| (exam_id, count.max(0) as u64))
            .collect())
    }

    async fn category_names(
        &self,
        ids: impl Iterator<Item = i64>,
    ) -> Result<HashMap<i64, String>> {
        let ids: Vec<i64> = ids.collect();
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        Ok(Categories::find()
            .filter(CategoryColumn::Id.is_in(ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询考试分类失败: {e}")))?
            .into_iter()
            .map(|c| (c.id, c.category))
            .collect())
    }

    /// 补全考试列表项的分类名、创建者和题目数量，保持输入顺序
    async fn exam_list_items(&self, exams: Vec<ExamModel>) -> Result<Vec<ExamListItem>> {
        if exams.is_empty() {
            return Ok(Vec::new());
        }

        let exam_ids: Vec<i64> = exams.iter().map(|e| e.id).collect();
        let counts = self.question_counts(&exam_ids).await?;
        let categories = self.category_names(exams.iter().map(|e| e.category_id)).await?;

        let creator_ids: Vec<i64> = exams.iter().map(|e| e.created_by).collect();
        let creators: HashMap<i64, String> = Users::find()
            .filter(UserColumn::Id.is_in(creator_ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        Ok(exams
            .into_iter()
            .map(|exam| ExamListItem {
                category: categories.get(&exam.category_id).cloned(),
                creator_username: creators.get(&exam.created_by).cloned(),
                question_count: counts.get(&exam.id).copied().unwrap_or(0),
                exam: exam.into_exam(),
            })
            .collect())
    }
}
