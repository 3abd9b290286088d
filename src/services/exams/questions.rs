use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::errors::RecruitError;
use crate::models::{
    ApiResponse, ErrorCode,
    common::require,
    exams::{
        entities::NewQuestion,
        requests::{
            AddQuestionRequest, AddQuestionsRequest, QuestionIdRequest, UpdateQuestionRequest,
        },
        responses::{QuestionResponse, QuestionsCreatedResponse},
    },
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

const QUESTION_NOT_FOUND: &str = "Question not found";

/// 单题与批量新增共用：超出题目上限时给出专门的错误码
async fn insert_questions(
    service: &ExamService,
    exam_id: i64,
    questions: Vec<NewQuestion>,
    request: &HttpRequest,
) -> ActixResult<Result<QuestionsCreatedResponse, HttpResponse>> {
    let storage = service.get_storage(request)?;
    let max_questions = service.get_config().recruitment.max_questions_per_exam;

    let outcome = match storage.add_questions(exam_id, questions, max_questions).await {
        Ok(questions) => Ok(QuestionsCreatedResponse {
            exam_id,
            inserted: questions.len(),
            questions,
        }),
        Err(RecruitError::Validation(msg)) => Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::QuestionLimitExceeded, msg))),
        Err(RecruitError::NotFound(msg)) => Err(not_found_response(ErrorCode::ExamNotFound, &msg)),
        Err(e) => Err(storage_error_response(e, "Question creation failed")),
    };
    Ok(outcome)
}

pub async fn add_question(
    service: &ExamService,
    question_request: AddQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (exam_id, question) = match question_request.into_parts() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    match insert_questions(service, exam_id, vec![question], request).await? {
        Ok(created) => match created.questions.into_iter().next() {
            Some(question) => {
                info!("Question {} added to exam {}", question.id, exam_id);
                Ok(HttpResponse::Created().json(ApiResponse::success(
                    QuestionResponse { question },
                    "Question added successfully",
                )))
            }
            None => Ok(storage_error_response(
                RecruitError::database_operation("No question returned after insert"),
                "Question creation failed",
            )),
        },
        Err(response) => Ok(response),
    }
}

pub async fn add_questions(
    service: &ExamService,
    questions_request: AddQuestionsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (exam_id, questions) = match questions_request.into_parts() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    match insert_questions(service, exam_id, questions, request).await? {
        Ok(created) => {
            info!("{} questions added to exam {}", created.inserted, exam_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                created,
                "Questions added successfully",
            )))
        }
        Err(response) => Ok(response),
    }
}

pub async fn update_question(
    service: &ExamService,
    question_request: UpdateQuestionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (question_id, question) = match question_request.into_parts() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_question(question_id, question).await {
        Ok(Some(question)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuestionResponse { question },
            "Question updated successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::QuestionNotFound,
            QUESTION_NOT_FOUND,
        )),
        Err(e) => Ok(storage_error_response(e, "Question update failed")),
    }
}

pub async fn delete_question(
    service: &ExamService,
    id_request: QuestionIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let question_id = match require(id_request.question_id, "question_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.delete_question(question_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
            "Question deleted successfully",
        ))),
        Ok(false) => Ok(not_found_response(
            ErrorCode::QuestionNotFound,
            QUESTION_NOT_FOUND,
        )),
        Err(e) => Ok(storage_error_response(e, "Question deletion failed")),
    }
}
