pub mod auth;
pub mod candidate_exams;
pub mod candidates;
pub mod data_admin;
pub mod exams;
pub mod interviews;
pub mod positions;
pub mod statuses;
pub mod study_materials;
pub mod system;

pub use auth::AuthService;
pub use candidate_exams::CandidateExamService;
pub use candidates::CandidateService;
pub use data_admin::DataAdminService;
pub use exams::ExamService;
pub use interviews::InterviewService;
pub use positions::PositionService;
pub use statuses::StatusService;
pub use study_materials::StudyMaterialService;
pub use system::SystemService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::error;

use crate::errors::RecruitError;
use crate::models::{ApiResponse, ErrorCode, FieldError, candidates::entities::Candidate};
use crate::storage::Storage;

/// 取服务自带的存储，没有时从 app_data 读取
pub(crate) fn resolve_storage(
    storage: &Option<Arc<dyn Storage>>,
    request: &HttpRequest,
) -> ActixResult<Arc<dyn Storage>> {
    if let Some(storage) = storage {
        return Ok(storage.clone());
    }
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            error!("Storage not found in app data");
            actix_web::error::ErrorInternalServerError("Storage not found in app data")
        })
}

/// 请求体校验失败
pub(crate) fn field_error_response(err: FieldError) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(err.code, err.message))
}

/// 存储层错误转信封：业务拒绝原样返回，其他错误记录日志后返回 500
pub(crate) fn storage_error_response(err: RecruitError, context: &str) -> HttpResponse {
    let status = err.status_code();
    if err.is_client_error() {
        return HttpResponse::build(status)
            .json(ApiResponse::error_empty(ErrorCode::for_status(status), err.message()));
    }
    error!("{}: {}", context, err);
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("{context}: {}", err.message()),
    ))
}

pub(crate) fn not_found_response(code: ErrorCode, message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(code, message))
}

/// 候选人不存在时直接给出 404 响应
pub(crate) async fn find_candidate(
    storage: &Arc<dyn Storage>,
    candidate_id: i64,
) -> Result<Candidate, HttpResponse> {
    match storage.get_candidate_by_id(candidate_id).await {
        Ok(Some(candidate)) => Ok(candidate),
        Ok(None) => Err(not_found_response(
            ErrorCode::CandidateNotFound,
            "Candidate not found",
        )),
        Err(e) => Err(storage_error_response(e, "Candidate lookup failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_storage_error_status_mapping() {
        let resp = storage_error_response(RecruitError::conflict("taken"), "Create failed");
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = storage_error_response(RecruitError::not_found("gone"), "Lookup failed");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = storage_error_response(RecruitError::database_operation("boom"), "Query failed");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_field_error_is_bad_request() {
        let resp = field_error_response(FieldError::missing("exam_id"));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
