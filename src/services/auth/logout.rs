use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AuthService;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt::JwtUtils;

/// 只校验令牌签名，不要求会话仍然有效；删除会话键后旧令牌立即失效
pub async fn handle_logout(
    service: &AuthService,
    token: Option<String>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(token) = token else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::TokenMissing,
            "Session token is required",
        )));
    };

    let claims = match JwtUtils::verify_token(&token) {
        Ok(claims) => claims,
        Err(e) => {
            info!("Logout rejected: {}", e.message());
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::TokenInvalid, e.message())));
        }
    };

    let sessions = service.get_sessions(request)?;
    sessions.revoke(claims.username()).await;
    info!("User {} logged out", claims.username());

    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Logout successful")))
}
