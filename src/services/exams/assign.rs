use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::errors::RecruitError;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::{requests::CandidateExamRequest, responses::ExamAssignedResponse},
};
use crate::services::{field_error_response, storage_error_response};

pub async fn assign_candidate(
    service: &ExamService,
    assign_request: CandidateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (candidate_id, exam_id) = match assign_request.into_ids() {
        Ok(ids) => ids,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    let exam_status_id = service.get_config().recruitment.exam_status_id;

    match storage
        .assign_exam(exam_id, candidate_id, exam_status_id)
        .await
    {
        Ok(report) => {
            info!("Exam {} assigned to candidate {}", exam_id, candidate_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ExamAssignedResponse { report },
                "Exam assigned to candidate successfully",
            )))
        }
        Err(RecruitError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::ExamAlreadyAssigned, msg))),
        Err(e) => Ok(storage_error_response(e, "Exam assignment failed")),
    }
}
