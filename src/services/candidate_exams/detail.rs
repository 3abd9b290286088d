use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CandidateExamService;
use crate::models::{
    ApiResponse,
    exams::{requests::CandidateExamRequest, responses::CandidateExamDetailResponse},
};
use crate::services::{field_error_response, find_candidate, storage_error_response};

/// 题目不含答案，附带历次作答记录
pub async fn get_exam_detail(
    service: &CandidateExamService,
    exam_request: CandidateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (candidate_id, exam_id) = match exam_request.into_ids() {
        Ok(ids) => ids,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    let candidate = match find_candidate(&storage, candidate_id).await {
        Ok(candidate) => candidate,
        Err(response) => return Ok(response),
    };

    match storage.get_candidate_exam(candidate_id, exam_id).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateExamDetailResponse {
                candidate_id,
                candidate_name: candidate.full_name,
                detail,
            },
            "Exam detail retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to get exam detail")),
    }
}
