use chrono::{DateTime, Utc};
use serde::Serialize;

// 面试安排
#[derive(Debug, Clone, Serialize)]
pub struct InterviewSchedule {
    #[serde(rename = "schedule_id")]
    pub id: i64,
    pub candidate_id: i64,
    pub candidate_position_id: i64,
    pub interview_date: String,
    pub interview_time: String,
    pub notes: String,
    pub meeting_link: Option<String>,
    pub admin_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInterviewSchedule {
    pub candidate_id: i64,
    pub candidate_position_id: i64,
    pub interview_date: String,
    pub interview_time: String,
    pub notes: String,
    pub meeting_link: Option<String>,
    pub admin_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewAdmin {
    pub id: i64,
    pub username: String,
    pub full_name: String,
}

/// 面试详情：附带职位、当前状态和面试官
#[derive(Debug, Clone, Serialize)]
pub struct InterviewDetail {
    #[serde(flatten)]
    pub schedule: InterviewSchedule,
    pub position_id: Option<i64>,
    pub position_name: Option<String>,
    #[serde(rename = "type")]
    pub position_type: Option<String>,
    pub work: Option<String>,
    pub date_of_application: Option<DateTime<Utc>>,
    pub status_name: Option<String>,
    pub admins: Vec<InterviewAdmin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleOutcome {
    pub schedule_id: i64,
    pub updated: bool,
}
