use serde::Serialize;

use super::entities::{InterviewDetail, InterviewSchedule};

#[derive(Debug, Serialize)]
pub struct ScheduleInterviewResponse {
    pub schedule_id: i64,
    pub updated: bool,
    pub schedule: InterviewSchedule,
}

#[derive(Debug, Serialize)]
pub struct CandidateInterviewListResponse {
    pub candidate_id: i64,
    pub total: usize,
    pub interviews: Vec<InterviewDetail>,
}

#[derive(Debug, Serialize)]
pub struct CandidateInterviewDetailResponse {
    pub interview: InterviewDetail,
}
