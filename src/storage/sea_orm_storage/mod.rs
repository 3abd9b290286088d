//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod candidates;
mod exams;
mod interviews;
mod lookups;
mod study_materials;
mod users;

#[cfg(test)]
mod tests;

use crate::config::AppConfig;
use crate::errors::{RecruitError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        let storage = Self::from_connection(db).await?;
        info!("SeaORM 存储初始化完成，数据库: {}", db_url);
        Ok(storage)
    }

    /// 在已有连接上运行迁移并构建存储
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| RecruitError::database_operation(format!("数据库迁移失败: {e}")))?;
        Ok(Self { db })
    }

    pub async fn ping_impl(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| RecruitError::database_connection(format!("数据库不可用: {e}")))
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RecruitError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| RecruitError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RecruitError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RecruitError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn list_users_by_role(&self, role: UserRole) -> Result<Vec<User>> {
        self.list_users_by_role_impl(role).await
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn count_users_by_role(&self, role: UserRole) -> Result<u64> {
        self.count_users_by_role_impl(role).await
    }

    // 候选人模块
    async fn create_candidate(&self, candidate: NewCandidate) -> Result<Candidate> {
        self.create_candidate_impl(candidate).await
    }

    async fn get_candidate_by_id(&self, id: i64) -> Result<Option<Candidate>> {
        self.get_candidate_by_id_impl(id).await
    }

    async fn get_candidate_profile_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<CandidateProfile>> {
        self.get_candidate_profile_by_user_id_impl(user_id).await
    }

    async fn list_candidates(&self) -> Result<Vec<CandidateListItem>> {
        self.list_candidates_impl().await
    }

    async fn get_candidate_detail(&self, id: i64) -> Result<Option<CandidateDetail>> {
        self.get_candidate_detail_impl(id).await
    }

    async fn list_candidate_applications(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<CandidateApplication>> {
        self.list_candidate_applications_impl(candidate_id).await
    }

    async fn update_application_status(&self, change: ApplicationStatus) -> Result<bool> {
        self.update_application_status_impl(change).await
    }

    async fn assign_position(&self, change: ApplicationStatus) -> Result<UpsertOutcome> {
        self.assign_position_impl(change).await
    }

    // 职位模块
    async fn list_positions(&self) -> Result<Vec<Position>> {
        self.list_positions_impl().await
    }

    async fn get_position(&self, id: i64) -> Result<Option<Position>> {
        self.get_position_impl(id).await
    }

    async fn create_position(&self, input: PositionInput) -> Result<Position> {
        self.create_position_impl(input).await
    }

    async fn update_position(&self, id: i64, input: PositionInput) -> Result<Option<Position>> {
        self.update_position_impl(id, input).await
    }

    async fn delete_position(&self, id: i64) -> Result<bool> {
        self.delete_position_impl(id).await
    }

    // 状态模块
    async fn list_statuses(&self) -> Result<Vec<Status>> {
        self.list_statuses_impl().await
    }

    async fn get_status(&self, id: i64) -> Result<Option<Status>> {
        self.get_status_impl(id).await
    }

    async fn create_status(&self, status_name: String) -> Result<Status> {
        self.create_status_impl(status_name).await
    }

    async fn update_status(&self, id: i64, status_name: String) -> Result<Option<Status>> {
        self.update_status_impl(id, status_name).await
    }

    async fn delete_status(&self, id: i64) -> Result<bool> {
        self.delete_status_impl(id).await
    }

    // 分类模块
    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.list_categories_impl().await
    }

    async fn create_category(&self, category: String) -> Result<Category> {
        self.create_category_impl(category).await
    }

    // 考试模块
    async fn create_exam(&self, exam: NewExam) -> Result<Exam> {
        self.create_exam_impl(exam).await
    }

    async fn get_exam(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_impl(id).await
    }

    async fn list_exams(&self) -> Result<Vec<ExamListItem>> {
        self.list_exams_impl().await
    }

    async fn get_exam_detail(&self, id: i64) -> Result<Option<ExamDetail>> {
        self.get_exam_detail_impl(id).await
    }

    async fn update_exam(&self, id: i64, update: ExamUpdate) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    async fn add_questions(
        &self,
        exam_id: i64,
        questions: Vec<NewQuestion>,
        max_questions: u64,
    ) -> Result<Vec<Question>> {
        self.add_questions_impl(exam_id, questions, max_questions)
            .await
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>> {
        self.get_question_impl(id).await
    }

    async fn update_question(&self, id: i64, question: NewQuestion) -> Result<Option<Question>> {
        self.update_question_impl(id, question).await
    }

    async fn delete_question(&self, id: i64) -> Result<bool> {
        self.delete_question_impl(id).await
    }

    async fn assign_exam(
        &self,
        exam_id: i64,
        candidate_id: i64,
        exam_status_id: i64,
    ) -> Result<ExamReport> {
        self.assign_exam_impl(exam_id, candidate_id, exam_status_id)
            .await
    }

    async fn list_candidate_exams(&self, candidate_id: i64) -> Result<Vec<AssignedExam>> {
        self.list_candidate_exams_impl(candidate_id).await
    }

    async fn get_candidate_exam(
        &self,
        candidate_id: i64,
        exam_id: i64,
    ) -> Result<CandidateExamDetail> {
        self.get_candidate_exam_impl(candidate_id, exam_id).await
    }

    async fn submit_exam(
        &self,
        candidate_id: i64,
        exam_id: i64,
        answers: Vec<SubmittedAnswer>,
    ) -> Result<ExamResult> {
        self.submit_exam_impl(candidate_id, exam_id, answers).await
    }

    async fn list_candidate_exam_reports(
        &self,
        candidate_id: i64,
        exam_id: Option<i64>,
    ) -> Result<Vec<CandidateExamReport>> {
        self.list_candidate_exam_reports_impl(candidate_id, exam_id)
            .await
    }

    async fn exam_summary(&self, candidate_id: i64) -> Result<ExamSummary> {
        self.exam_summary_impl(candidate_id).await
    }

    // 学习资料模块
    async fn create_study_material(
        &self,
        created_by: i64,
        input: StudyMaterialInput,
    ) -> Result<StudyMaterial> {
        self.create_study_material_impl(created_by, input).await
    }

    async fn list_study_materials(&self) -> Result<Vec<StudyMaterialListItem>> {
        self.list_study_materials_impl().await
    }

    async fn get_study_material_detail(&self, id: i64) -> Result<Option<StudyMaterialDetail>> {
        self.get_study_material_detail_impl(id).await
    }

    async fn update_study_material(
        &self,
        id: i64,
        input: StudyMaterialInput,
    ) -> Result<Option<StudyMaterial>> {
        self.update_study_material_impl(id, input).await
    }

    async fn delete_study_material(&self, id: i64) -> Result<bool> {
        self.delete_study_material_impl(id).await
    }

    async fn assign_study_materials(
        &self,
        candidate_id: i64,
        study_ids: Vec<i64>,
    ) -> Result<StudyAssignmentResult> {
        self.assign_study_materials_impl(candidate_id, study_ids)
            .await
    }

    async fn list_candidate_study_materials(
        &self,
        candidate_id: i64,
    ) -> Result<Vec<AssignedStudyMaterial>> {
        self.list_candidate_study_materials_impl(candidate_id).await
    }

    async fn get_candidate_study_material(
        &self,
        candidate_id: i64,
        study_id: i64,
    ) -> Result<Option<AssignedStudyMaterial>> {
        self.get_candidate_study_material_impl(candidate_id, study_id)
            .await
    }

    // 面试模块
    async fn schedule_interview(
        &self,
        schedule: NewInterviewSchedule,
    ) -> Result<(InterviewSchedule, ScheduleOutcome)> {
        self.schedule_interview_impl(schedule).await
    }

    async fn list_candidate_interviews(&self, candidate_id: i64) -> Result<Vec<InterviewDetail>> {
        self.list_candidate_interviews_impl(candidate_id).await
    }

    async fn get_candidate_interview(
        &self,
        candidate_id: i64,
        schedule_id: i64,
    ) -> Result<Option<InterviewDetail>> {
        self.get_candidate_interview_impl(candidate_id, schedule_id)
            .await
    }

    async fn ping(&self) -> Result<()> {
        self.ping_impl().await
    }
}
