use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CandidateExamService;
use crate::models::{
    ApiResponse, candidates::requests::CandidateIdRequest, common::require,
    exams::responses::CandidateExamListResponse,
};
use crate::services::{field_error_response, find_candidate, storage_error_response};

pub async fn list_exams(
    service: &CandidateExamService,
    id_request: CandidateIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(id_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    let candidate = match find_candidate(&storage, candidate_id).await {
        Ok(candidate) => candidate,
        Err(response) => return Ok(response),
    };

    match storage.list_candidate_exams(candidate_id).await {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateExamListResponse {
                candidate_id,
                candidate_name: candidate.full_name,
                total_exams: exams.len(),
                exams,
            },
            "Candidate exams retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list candidate exams")),
    }
}
