use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CandidateService;
use crate::models::{ApiResponse, candidates::responses::CandidateListResponse};
use crate::services::storage_error_response;

pub async fn list_candidates(
    service: &CandidateService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_candidates().await {
        Ok(candidates) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateListResponse {
                total: candidates.len(),
                candidates,
            },
            "Candidates retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list candidates")),
    }
}
