pub mod candidate;
pub mod schedule;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{
    candidates::requests::CandidateIdRequest,
    interviews::requests::{CandidateInterviewRequest, ScheduleInterviewRequest},
};
use crate::storage::Storage;

pub struct InterviewService {
    storage: Option<Arc<dyn Storage>>,
}

impl InterviewService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 安排面试（同一应聘记录重复提交时更新）
    pub async fn schedule_interview(
        &self,
        schedule_request: ScheduleInterviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        schedule::schedule_interview(self, schedule_request, request).await
    }

    pub async fn list_candidate_interviews(
        &self,
        id_request: CandidateIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        candidate::list_candidate_interviews(self, id_request, request).await
    }

    pub async fn get_candidate_interview(
        &self,
        interview_request: CandidateInterviewRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        candidate::get_candidate_interview(self, interview_request, request).await
    }
}
