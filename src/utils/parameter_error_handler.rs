use actix_web::{Error, HttpRequest, HttpResponse, error::JsonPayloadError};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

/// JSON 请求体解析失败时返回统一的 FAILED 信封
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("Rejected JSON body for {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json".to_string(),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            "Request body is too large".to_string()
        }
        JsonPayloadError::Deserialize(e) => format!("Invalid request body: {e}"),
        _ => "Invalid request body".to_string(),
    };

    let mut builder = if matches!(
        err,
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. }
    ) {
        HttpResponse::PayloadTooLarge()
    } else {
        HttpResponse::BadRequest()
    };
    let response = builder.json(ApiResponse::error_empty(ErrorCode::BadRequest, message));

    actix_web::error::InternalError::from_response(err, response).into()
}
