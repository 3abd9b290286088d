use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ExamService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::require,
    exams::{
        requests::{CreateExamRequest, ExamIdRequest, UpdateExamRequest},
        responses::{ExamDetailResponse, ExamListResponse, ExamResponse},
    },
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

const EXAM_NOT_FOUND: &str = "Exam not found";

pub async fn create_exam(
    service: &ExamService,
    create_request: CreateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let new_exam = match create_request.into_new_exam() {
        Ok(exam) => exam,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 创建人或分类不存在时返回 404
    match storage.create_exam(new_exam).await {
        Ok(exam) => {
            info!("Exam {} created by user {}", exam.id, exam.created_by);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                ExamResponse { exam },
                "Exam created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Exam creation failed")),
    }
}

pub async fn list_exams(service: &ExamService, request: &HttpRequest) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_exams().await {
        Ok(exams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExamListResponse {
                total: exams.len(),
                exams,
            },
            "Exams retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list exams")),
    }
}

pub async fn get_exam_detail(
    service: &ExamService,
    id_request: ExamIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let exam_id = match require(id_request.exam_id, "exam_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.get_exam_detail(exam_id).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExamDetailResponse { exam },
            "Exam detail retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::ExamNotFound, EXAM_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Failed to get exam detail")),
    }
}

pub async fn update_exam(
    service: &ExamService,
    update_request: UpdateExamRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (exam_id, update) = match update_request.into_update() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_exam(exam_id, update).await {
        Ok(Some(exam)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ExamResponse { exam },
            "Exam updated successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::ExamNotFound, EXAM_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Exam update failed")),
    }
}

pub async fn delete_exam(
    service: &ExamService,
    id_request: ExamIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let exam_id = match require(id_request.exam_id, "exam_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 报告、题目、考试在同一事务内删除
    match storage.delete_exam(exam_id).await {
        Ok(true) => {
            info!("Exam {} deleted with its questions and reports", exam_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted successfully")))
        }
        Ok(false) => Ok(not_found_response(ErrorCode::ExamNotFound, EXAM_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Exam deletion failed")),
    }
}
