use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AuthService;
use crate::models::{
    ApiResponse,
    users::{requests::CreateUserRequest, responses::RegisterResponse},
};
use crate::services::{field_error_response, storage_error_response};
use crate::utils::password::hash_password;

pub async fn handle_register(
    service: &AuthService,
    create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let mut new_user = match create_request.into_new_user() {
        Ok(user) => user,
        Err(e) => return Ok(field_error_response(e)),
    };

    // 明文密码替换为 Argon2 哈希
    new_user.password = match hash_password(&new_user.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(storage_error_response(e, "Register failed")),
    };

    let storage = service.get_storage(request)?;
    match storage.create_user(new_user).await {
        Ok(user) => {
            info!("Registered user {} with role {}", user.username, user.role);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                RegisterResponse { user },
                "User registered successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Register failed")),
    }
}
