use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CandidateExamService;
use crate::errors::RecruitError;
use crate::models::{
    ApiResponse, ErrorCode,
    exams::{requests::SubmitExamRequest, responses::ExamResultResponse},
};
use crate::services::{field_error_response, storage_error_response};

pub async fn submit_exam(
    service: &CandidateExamService,
    submit_request: SubmitExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (candidate_id, exam_id, answers) = match submit_request.into_parts() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 校验、评分、标记完成都在存储层的同一事务内
    match storage.submit_exam(candidate_id, exam_id, answers).await {
        Ok(result) => {
            info!(
                "Candidate {} submitted exam {}: {}/{} correct, score {:.2}",
                candidate_id, exam_id, result.correct_answers, result.total_questions, result.score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ExamResultResponse { result },
                "Exam submitted successfully",
            )))
        }
        Err(RecruitError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::ExamAlreadyCompleted, msg))),
        Err(RecruitError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ExamHasNoQuestions, msg))),
        Err(e) => Ok(storage_error_response(e, "Exam submission failed")),
    }
}
