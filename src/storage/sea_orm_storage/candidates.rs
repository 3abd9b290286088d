//! 候选人与应聘记录存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::candidate_positions::{
    ActiveModel as ApplicationActiveModel, Column as ApplicationColumn, Entity as Applications,
    Model as ApplicationModel,
};
use crate::entity::candidates::{ActiveModel, Column, Entity as Candidates};
use crate::entity::positions::{Column as PositionColumn, Entity as Positions};
use crate::entity::status::{Column as StatusColumn, Entity as StatusEntity};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{RecruitError, Result};
use crate::models::candidates::entities::{
    ApplicationStatus, Candidate, CandidateApplication, CandidateDetail, CandidateListItem,
    CandidateProfile, NewCandidate, UpsertOutcome,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 新增候选人，用户必须存在且尚未绑定候选人记录
    pub async fn create_candidate_impl(&self, req: NewCandidate) -> Result<Candidate> {
        if self.get_user_by_id_impl(req.user_id).await?.is_none() {
            return Err(RecruitError::not_found(format!(
                "User {} not found",
                req.user_id
            )));
        }

        let existing = Candidates::find()
            .filter(Column::UserId.eq(req.user_id))
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?;
        if existing.is_some() {
            return Err(RecruitError::conflict(format!(
                "User {} already has a candidate profile",
                req.user_id
            )));
        }

        let now = chrono::Utc::now().timestamp();
        let model = ActiveModel {
            user_id: Set(req.user_id),
            full_name: Set(req.full_name),
            age: Set(req.age),
            birthdate: Set(req.birthdate),
            gender: Set(req.gender),
            email: Set(req.email),
            phone_number: Set(req.phone_number),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("创建候选人失败: {e}")))?;

        Ok(result.into_candidate())
    }

    pub async fn get_candidate_by_id_impl(&self, id: i64) -> Result<Option<Candidate>> {
        let result = Candidates::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?;

        Ok(result.map(|m| m.into_candidate()))
    }

    /// 候选人资料（含用户名与用户邮箱）
    pub async fn get_candidate_profile_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>> {
        let result = Candidates::find()
            .filter(Column::UserId.eq(user_id))
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人资料失败: {e}")))?;

        Ok(result.map(|(candidate, user)| CandidateProfile {
            candidate: candidate.into_candidate(),
            username: user.as_ref().map(|u| u.username.clone()),
            user_email: user.map(|u| u.email),
        }))
    }

    async fn get_candidate_profile_impl(&self, id: i64) -> Result<Option<CandidateProfile>> {
        let result = Candidates::find_by_id(id)
            .find_also_related(Users)
            .one(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人资料失败: {e}")))?;

        Ok(result.map(|(candidate, user)| CandidateProfile {
            candidate: candidate.into_candidate(),
            username: user.as_ref().map(|u| u.username.clone()),
            user_email: user.map(|u| u.email),
        }))
    }

    /// 候选人列表：每条应聘记录一行，缺失的职位/状态名称用占位符
    pub async fn list_candidates_impl(&self) -> Result<Vec<CandidateListItem>> {
        let candidates = Candidates::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人列表失败: {e}")))?;

        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let user_ids: Vec<i64> = candidates.iter().map(|c| c.user_id).collect();
        let usernames: HashMap<i64, String> = Users::find()
            .filter(UserColumn::Id.is_in(user_ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询用户失败: {e}")))?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect();

        let applications = Applications::find()
            .order_by_asc(ApplicationColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询应聘记录失败: {e}")))?;
        let (position_names, status_names) = self.lookup_names(&applications).await?;

        let mut by_candidate: HashMap<i64, Vec<ApplicationModel>> = HashMap::new();
        for application in applications {
            by_candidate
                .entry(application.candidate_id)
                .or_default()
                .push(application);
        }

        let placeholder = || CandidateListItem::PLACEHOLDER.to_string();
        let mut items = Vec::new();
        for model in candidates {
            let username = usernames.get(&model.user_id).cloned();
            let candidate = model.into_candidate();
            match by_candidate.remove(&candidate.id) {
                Some(apps) => {
                    for app in apps {
                        items.push(CandidateListItem {
                            candidate: candidate.clone(),
                            username: username.clone(),
                            position_id: Some(app.position_id),
                            position_name: position_names
                                .get(&app.position_id)
                                .map(|(name, _, _)| name.clone())
                                .unwrap_or_else(placeholder),
                            status_id: app.status_id,
                            status_name: app
                                .status_id
                                .and_then(|id| status_names.get(&id).cloned())
                                .unwrap_or_else(placeholder),
                            date_of_application: Some(crate::entity::to_datetime(
                                app.date_of_application,
                            )),
                        });
                    }
                }
                None => items.push(CandidateListItem {
                    candidate,
                    username,
                    position_id: None,
                    position_name: placeholder(),
                    status_id: None,
                    status_name: placeholder(),
                    date_of_application: None,
                }),
            }
        }

        Ok(items)
    }

    /// 候选人详情：资料、应聘记录、面试、考试报告与汇总、学习资料
    pub async fn get_candidate_detail_impl(&self, id: i64) -> Result<Option<CandidateDetail>> {
        let Some(profile) = self.get_candidate_profile_impl(id).await? else {
            return Ok(None);
        };

        let data_user = self.list_candidate_applications_impl(id).await?;
        let interviews = self.list_candidate_interviews_impl(id).await?;
        let exam_reports = self.list_candidate_exam_reports_impl(id, None).await?;
        let summary_report = self.exam_summary_impl(id).await?;
        let study_materials = self.list_candidate_study_materials_impl(id).await?;

        Ok(Some(CandidateDetail {
            profile,
            data_user,
            interviews,
            exam_reports,
            summary_report,
            study_materials,
        }))
    }

    pub async fn list_candidate_applications_impl(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<CandidateApplication>> {
        let applications = Applications::find()
            .filter(ApplicationColumn::CandidateId.eq(candidate_id))
            .order_by_asc(ApplicationColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询应聘记录失败: {e}")))?;

        let (positions, statuses) = self.lookup_names(&applications).await?;

        Ok(applications
            .into_iter()
            .filter_map(|app| {
                // 职位随外键级联删除，查不到说明记录已失效
                let (position_name, position_type, work) = positions.get(&app.position_id)?.clone();
                Some(CandidateApplication {
                    id: app.id,
                    candidate_id: app.candidate_id,
                    position_id: app.position_id,
                    status_id: app.status_id,
                    date_of_application: crate::entity::to_datetime(app.date_of_application),
                    position_name,
                    position_type,
                    work,
                    status_name: app.status_id.and_then(|id| statuses.get(&id).cloned()),
                })
            })
            .collect())
    }

    pub async fn update_application_status_impl(&self, change: ApplicationStatus) -> Result<bool> {
        let result = Applications::update_many()
            .col_expr(
                ApplicationColumn::StatusId,
                sea_orm::sea_query::Expr::value(change.status_id),
            )
            .filter(ApplicationColumn::CandidateId.eq(change.candidate_id))
            .filter(ApplicationColumn::PositionId.eq(change.position_id))
            .exec(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("更新应聘状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 分配职位：已有应聘记录则更新状态，否则以当前时间新建
    pub async fn assign_position_impl(&self, change: ApplicationStatus) -> Result<UpsertOutcome> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RecruitError::database_operation(format!("开启事务失败: {e}")))?;

        let candidate = Candidates::find_by_id(change.candidate_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询候选人失败: {e}")))?;
        if candidate.is_none() {
            return Err(RecruitError::not_found(format!(
                "Candidate {} not found",
                change.candidate_id
            )));
        }

        let position = Positions::find_by_id(change.position_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询职位失败: {e}")))?;
        if position.is_none() {
            return Err(RecruitError::not_found(format!(
                "Position {} not found",
                change.position_id
            )));
        }

        let status = StatusEntity::find_by_id(change.status_id)
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询状态失败: {e}")))?;
        if status.is_none() {
            return Err(RecruitError::not_found(format!(
                "Status {} not found",
                change.status_id
            )));
        }

        let existing = Applications::find()
            .filter(ApplicationColumn::CandidateId.eq(change.candidate_id))
            .filter(ApplicationColumn::PositionId.eq(change.position_id))
            .one(&txn)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询应聘记录失败: {e}")))?;

        let outcome = match existing {
            Some(application) => {
                let id = application.id;
                let mut model: ApplicationActiveModel = application.into();
                model.status_id = Set(Some(change.status_id));
                model.update(&txn).await.map_err(|e| {
                    RecruitError::database_operation(format!("更新应聘记录失败: {e}"))
                })?;
                UpsertOutcome { id, created: false }
            }
            None => {
                let model = ApplicationActiveModel {
                    candidate_id: Set(change.candidate_id),
                    position_id: Set(change.position_id),
                    status_id: Set(Some(change.status_id)),
                    date_of_application: Set(chrono::Utc::now().timestamp()),
                    ..Default::default()
                };
                let inserted = model.insert(&txn).await.map_err(|e| {
                    RecruitError::database_operation(format!("创建应聘记录失败: {e}"))
                })?;
                UpsertOutcome {
                    id: inserted.id,
                    created: true,
                }
            }
        };

        txn.commit()
            .await
            .map_err(|e| RecruitError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(outcome)
    }

    /// 批量取应聘记录涉及的职位 (名称, 类型, 工作方式) 与状态名称
    #[allow(clippy::type_complexity)]
    pub(super) async fn lookup_names(
        &self,
        applications: &[ApplicationModel],
    ) -> Result<(
        HashMap<i64, (String, String, String)>,
        HashMap<i64, String>,
    )> {
        if applications.is_empty() {
            return Ok((HashMap::new(), HashMap::new()));
        }

        let position_ids: Vec<i64> = applications.iter().map(|a| a.position_id).collect();
        let positions = Positions::find()
            .filter(PositionColumn::Id.is_in(position_ids))
            .all(&self.db)
            .await
            .map_err(|e| RecruitError::database_operation(format!("查询职位失败: {e}")))?
            .into_iter()
            .map(|p| (p.id, (p.position_name, p.position_type, p.work)))
            .collect();

        let status_ids: Vec<i64> = applications.iter().filter_map(|a| a.status_id).collect();
        let statuses = if status_ids.is_empty() {
            HashMap::new()
        } else {
            StatusEntity::find()
                .filter(StatusColumn::Id.is_in(status_ids))
                .all(&self.db)
                .await
                .map_err(|e| RecruitError::database_operation(format!("查询状态失败: {e}")))?
                .into_iter()
                .map(|s| (s.id, s.status_name))
                .collect()
        };

        Ok((positions, statuses))
    }
}
