pub mod applications;
pub mod create;
pub mod detail;
pub mod list;
pub mod lookups;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::candidates::requests::{
    ApplicationStatusRequest, CandidateIdRequest, CreateCandidateRequest,
};
use crate::storage::Storage;

pub struct CandidateService {
    storage: Option<Arc<dyn Storage>>,
}

impl CandidateService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn create_candidate(
        &self,
        create_request: CreateCandidateRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_candidate(self, create_request, request).await
    }

    pub async fn list_candidates(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_candidates(self, request).await
    }

    pub async fn get_candidate_detail(
        &self,
        id_request: CandidateIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_candidate_detail(self, id_request, request).await
    }

    pub async fn list_positions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        lookups::list_positions(self, request).await
    }

    pub async fn list_statuses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        lookups::list_statuses(self, request).await
    }

    // 候选人各应聘记录的状态
    pub async fn list_application_statuses(
        &self,
        id_request: CandidateIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        applications::list_application_statuses(self, id_request, request).await
    }

    // 候选人应聘的职位
    pub async fn list_applied_positions(
        &self,
        id_request: CandidateIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        applications::list_applied_positions(self, id_request, request).await
    }

    pub async fn update_application_status(
        &self,
        status_request: ApplicationStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        applications::update_application_status(self, status_request, request).await
    }

    pub async fn assign_position(
        &self,
        status_request: ApplicationStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        applications::assign_position(self, status_request, request).await
    }
}
