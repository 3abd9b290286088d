use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::exams::entities::{CandidateExamReport, ExamSummary};
use crate::models::interviews::entities::InterviewDetail;
use crate::models::study_materials::entities::AssignedStudyMaterial;

// 候选人实体
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    #[serde(rename = "candidate_id")]
    pub id: i64,
    pub user_id: i64,
    pub full_name: Option<String>,
    pub age: i32,
    pub birthdate: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewCandidate {
    pub user_id: i64,
    pub full_name: Option<String>,
    pub age: i32,
    pub birthdate: String,
    pub gender: String,
    pub email: String,
    pub phone_number: String,
}

/// 候选人资料：候选人记录 + 关联用户的用户名与邮箱
#[derive(Debug, Clone, Serialize)]
pub struct CandidateProfile {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub username: Option<String>,
    pub user_email: Option<String>,
}

/// 一条应聘记录，附带职位与状态名称
#[derive(Debug, Clone, Serialize)]
pub struct CandidateApplication {
    #[serde(rename = "application_id")]
    pub id: i64,
    pub candidate_id: i64,
    pub position_id: i64,
    pub status_id: Option<i64>,
    pub date_of_application: DateTime<Utc>,
    pub position_name: String,
    #[serde(rename = "type")]
    pub position_type: String,
    pub work: String,
    pub status_name: Option<String>,
}

/// 候选人列表行，每条应聘记录一行，没有应聘记录的候选人也占一行
#[derive(Debug, Clone, Serialize)]
pub struct CandidateListItem {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub username: Option<String>,
    pub position_id: Option<i64>,
    pub position_name: String,
    pub status_id: Option<i64>,
    pub status_name: String,
    pub date_of_application: Option<DateTime<Utc>>,
}

impl CandidateListItem {
    /// 列表中缺失的职位或状态名称显示为 "-"
    pub const PLACEHOLDER: &'static str = "-";
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub profile: CandidateProfile,
    pub data_user: Vec<CandidateApplication>,
    pub interviews: Vec<InterviewDetail>,
    pub exam_reports: Vec<CandidateExamReport>,
    pub summary_report: ExamSummary,
    pub study_materials: Vec<AssignedStudyMaterial>,
}

/// 应聘记录的状态变更
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationStatus {
    pub candidate_id: i64,
    pub position_id: i64,
    pub status_id: i64,
}

/// upsert 的结果：命中已有记录时 created 为 false
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub id: i64,
    pub created: bool,
}
