use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CandidateExamService;
use crate::models::{
    ApiResponse,
    common::require,
    exams::{requests::ExamReportRequest, responses::CandidateExamReportsResponse},
};
use crate::services::{field_error_response, find_candidate, storage_error_response};

/// exam_id 为空时返回全部报告；汇总只统计已完成的考试
pub async fn exam_report(
    service: &CandidateExamService,
    report_request: ExamReportRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(report_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    let candidate = match find_candidate(&storage, candidate_id).await {
        Ok(candidate) => candidate,
        Err(response) => return Ok(response),
    };

    let reports = match storage
        .list_candidate_exam_reports(candidate_id, report_request.exam_id)
        .await
    {
        Ok(reports) => reports,
        Err(e) => return Ok(storage_error_response(e, "Failed to list exam reports")),
    };

    match storage.exam_summary(candidate_id).await {
        Ok(summary) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateExamReportsResponse {
                candidate_id,
                candidate_name: candidate.full_name,
                total_reports: reports.len(),
                average_score: summary.average_score,
                total_exams_taken: summary.total_exams,
                reports,
            },
            "Exam reports retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to summarize exam reports")),
    }
}
