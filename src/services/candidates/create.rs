use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CandidateService;
use crate::models::{
    ApiResponse,
    candidates::{requests::CreateCandidateRequest, responses::CandidateResponse},
};
use crate::services::{field_error_response, storage_error_response};

pub async fn create_candidate(
    service: &CandidateService,
    create_request: CreateCandidateRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let new_candidate = match create_request.into_new_candidate() {
        Ok(candidate) => candidate,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 用户不存在 404，已有候选人档案 409
    match storage.create_candidate(new_candidate).await {
        Ok(candidate) => {
            info!(
                "Candidate {} created for user {}",
                candidate.id, candidate.user_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                CandidateResponse { candidate },
                "Candidate created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Candidate creation failed")),
    }
}
