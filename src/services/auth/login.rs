use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use super::{AuthService, LoginPortal};
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{requests::LoginRequest, responses::LoginResponse},
};
use crate::services::{field_error_response, storage_error_response};
use crate::utils::jwt::JwtUtils;
use crate::utils::password::verify_password;

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    portal: LoginPortal,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (username, password) = match login_request.into_credentials() {
        Ok(credentials) => credentials,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    let sessions = service.get_sessions(request)?;
    let config = service.get_config();

    // 1. 查找用户
    let user = match storage.get_user_by_username(&username).await {
        Ok(user) => user,
        Err(e) => return Ok(storage_error_response(e, "Login failed")),
    };

    // 2. 校验密码，用户不存在与密码错误返回同一条消息
    let Some(user) = user.filter(|user| verify_password(&password, &user.password)) else {
        info!("Login failed for user {}", username);
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            "Invalid username or password",
        )));
    };

    // 3. 签发令牌并覆盖旧会话
    let token = match JwtUtils::generate_token(user.id, &user.username, user.role.as_str()) {
        Ok(token) => token,
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };
    sessions
        .store(&user.username, &token, config.session_ttl())
        .await;

    info!("User {} logged in ({:?} portal)", user.username, portal);

    let response = LoginResponse {
        role: user.role,
        token,
        expires_in: config.jwt.token_expiry,
        user_id: (portal == LoginPortal::Candidate).then_some(user.id),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Login successful")))
}
