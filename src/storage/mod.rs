use std::sync::Arc;

use crate::models::{
    candidates::entities::{
        ApplicationStatus, Candidate, CandidateApplication, CandidateDetail, CandidateListItem,
        CandidateProfile, NewCandidate, UpsertOutcome,
    },
    exams::entities::{
        AssignedExam, CandidateExamDetail, CandidateExamReport, Category, Exam, ExamDetail,
        ExamListItem, ExamReport, ExamResult, ExamSummary, ExamUpdate, NewExam, NewQuestion,
        Question, SubmittedAnswer,
    },
    interviews::entities::{
        InterviewDetail, InterviewSchedule, NewInterviewSchedule, ScheduleOutcome,
    },
    positions::entities::{Position, PositionInput},
    statuses::entities::Status,
    study_materials::entities::{
        AssignedStudyMaterial, StudyAssignmentResult, StudyMaterial, StudyMaterialDetail,
        StudyMaterialInput, StudyMaterialListItem,
    },
    users::entities::{NewUser, User, UserRole, UserUpdate},
};

use crate::errors::Result;

pub mod sea_orm_storage;

/// 存储层接口
///
/// 查询类方法用 `Option` 表示记录不存在；多步写入在事务内完成，
/// 业务层面的拒绝通过 `RecruitError::{NotFound, Conflict, Validation}` 返回。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户，用户名重复返回 Conflict
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 按角色列出用户
    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 统计某角色的用户数量
    async fn count_users_by_role(&self, role: UserRole) -> Result<u64>;

    /// 候选人方法
    async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate>;
    async fn get_candidate_by_id(&self, id: i64) -> Result<Option<Candidate>>;
    async fn get_candidate_profile_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>>;
    async fn list_candidates(&self) -> Result<Vec<CandidateListItem>>;
    async fn get_candidate_detail(&self, id: i64) -> Result<Option<CandidateDetail>>;
    // 候选人的全部应聘记录
    async fn list_candidate_applications(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<CandidateApplication>>;
    // 修改应聘状态，没有对应记录时返回 false
    async fn update_application_status(&self, change: ApplicationStatus) -> Result<bool>;
    // 分配职位：已存在则更新状态，否则新建
    async fn assign_position(&self, change: ApplicationStatus) -> Result<UpsertOutcome>;

    /// 职位方法
    async fn list_positions(&self) -> Result<Vec<Position>>;
    async fn get_position(&self, id: i64) -> Result<Option<Position>>;
    async fn create_position(&self, input: PositionInput) -> Result<Position>;
    async fn update_position(&self, id: i64, input: PositionInput) -> Result<Option<Position>>;
    async fn delete_position(&self, id: i64) -> Result<bool>;

    /// 状态方法
    async fn list_statuses(&self) -> Result<Vec<Status>>;
    async fn get_status(&self, id: i64) -> Result<Option<Status>>;
    async fn create_status(&self, status_name: String) -> Result<Status>;
    async fn update_status(&self, id: i64, status_name: String) -> Result<Option<Status>>;
    async fn delete_status(&self, id: i64) -> Result<bool>;

    /// 考试分类方法
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn create_category(&self, category: String) -> Result<Category>;

    /// 考试管理方法
    async fn create_exam(&self, exam: NewExam) -> Result<Exam>;
    async fn get_exam(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams(&self) -> Result<Vec<ExamListItem>>;
    async fn get_exam_detail(&self, id: i64) -> Result<Option<ExamDetail>>;
    async fn update_exam(&self, id: i64, update: ExamUpdate) -> Result<Option<Exam>>;
    // 事务内删除报告、题目和考试本身
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 题目方法
    // 事务内检查题目上限后批量插入
    async fn add_questions(
        &self,
        exam_id: i64,
        questions: Vec<NewQuestion>,
        max_questions: u64,
    ) -> Result<Vec<Question>>;
    async fn get_question(&self, id: i64) -> Result<Option<Question>>;
    async fn update_question(&self, id: i64, question: NewQuestion) -> Result<Option<Question>>;
    async fn delete_question(&self, id: i64) -> Result<bool>;

    /// 候选人考试方法
    // 建立考试报告并把候选人的应聘状态推进到考试阶段
    async fn assign_exam(
        &self,
        exam_id: i64,
        candidate_id: i64,
        exam_status_id: i64,
    ) -> Result<ExamReport>;
    async fn list_candidate_exams(&self, candidate_id: i64) -> Result<Vec<AssignedExam>>;
    async fn get_candidate_exam(
        &self,
        candidate_id: i64,
        exam_id: i64,
    ) -> Result<CandidateExamDetail>;
    // 事务内评分并标记完成
    async fn submit_exam(
        &self,
        candidate_id: i64,
        exam_id: i64,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<ExamResult>;
    async fn list_candidate_exam_reports(
        &self,
        candidate_id: i64,
        exam_id: Option<i64>,
    ) -> Result<Vec<CandidateExamReport>>;
    async fn exam_summary(&self, candidate_id: i64) -> Result<ExamSummary>;

    /// 学习资料方法
    async fn create_study_material(
        &self,
        created_by: i64,
        input: StudyMaterialInput,
    ) -> Result<StudyMaterial>;
    async fn list_study_materials(&self) -> Result<Vec<StudyMaterialListItem>>;
    async fn get_study_material_detail(&self, id: i64) -> Result<Option<StudyMaterialDetail>>;
    async fn update_study_material(
        &self,
        id: i64,
        input: StudyMaterialInput,
    ) -> Result<Option<StudyMaterial>>;
    async fn delete_study_material(&self, id: i64) -> Result<bool>;
    async fn assign_study_materials(
        &self,
        candidate_id: i64,
        study_ids: Vec<i64>,
    ) -> Result<StudyAssignmentResult>;
    async fn list_candidate_study_materials(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<AssignedStudyMaterial>>;
    async fn get_candidate_study_material(
        &self,
        candidate_id: i64,
        study_id: i64,
    ) -> Result<Option<AssignedStudyMaterial>>;

    /// 面试方法
    // 按 (candidate_id, candidate_position_id) upsert
    async fn schedule_interview(
        &self,
        schedule: NewInterviewSchedule,
    ) -> Result<(InterviewSchedule, ScheduleOutcome)>;
    async fn list_candidate_interviews(&self, candidate_id: i64) -> Result<Vec<InterviewDetail>>;
    async fn get_candidate_interview(
        &self,
        candidate_id: i64,
        schedule_id: i64,
    ) -> Result<Option<InterviewDetail>>;

    /// 数据库连通性检查
    async fn ping(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
