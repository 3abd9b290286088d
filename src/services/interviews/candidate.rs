use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::InterviewService;
use crate::models::{
    ApiResponse, ErrorCode,
    candidates::requests::CandidateIdRequest,
    common::require,
    interviews::{
        requests::CandidateInterviewRequest,
        responses::{CandidateInterviewDetailResponse, CandidateInterviewListResponse},
    },
};
use crate::services::{
    field_error_response, find_candidate, not_found_response, storage_error_response,
};

pub async fn list_candidate_interviews(
    service: &InterviewService,
    id_request: CandidateIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(id_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    if let Err(response) = find_candidate(&storage, candidate_id).await {
        return Ok(response);
    }

    match storage.list_candidate_interviews(candidate_id).await {
        Ok(interviews) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateInterviewListResponse {
                candidate_id,
                total: interviews.len(),
                interviews,
            },
            "Interviews retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list interviews")),
    }
}

pub async fn get_candidate_interview(
    service: &InterviewService,
    interview_request: CandidateInterviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(interview_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };
    let schedule_id = match require(interview_request.schedule_id, "schedule_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage
        .get_candidate_interview(candidate_id, schedule_id)
        .await
    {
        Ok(Some(interview)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateInterviewDetailResponse { interview },
            "Interview retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::InterviewNotFound,
            "Interview not found for this candidate",
        )),
        Err(e) => Ok(storage_error_response(e, "Failed to get interview")),
    }
}
