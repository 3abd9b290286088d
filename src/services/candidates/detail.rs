use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CandidateService;
use crate::models::{
    ApiResponse, ErrorCode,
    candidates::{requests::CandidateIdRequest, responses::CandidateDetailResponse},
    common::require,
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

pub async fn get_candidate_detail(
    service: &CandidateService,
    id_request: CandidateIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(id_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.get_candidate_detail(candidate_id).await {
        Ok(Some(candidate)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateDetailResponse { candidate },
            "Candidate detail retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::CandidateNotFound,
            "Candidate not found",
        )),
        Err(e) => Ok(storage_error_response(e, "Failed to get candidate detail")),
    }
}
