use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DataAdminService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::CreateUserRequest, responses::AdminResponse},
};
use crate::services::{field_error_response, storage_error_response};
use crate::utils::password::hash_password;

pub async fn create_admin(
    service: &DataAdminService,
    create_request: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let mut new_user = match create_request.into_new_user() {
        Ok(user) => user,
        Err(e) => return Ok(field_error_response(e)),
    };

    // 这里只能创建管理类账号
    if !new_user.role.is_admin() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::UserRoleInvalid,
            "Role must be admin or superadmin",
        )));
    }

    new_user.password = match hash_password(&new_user.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(storage_error_response(e, "Admin creation failed")),
    };

    let storage = service.get_storage(request)?;
    match storage.create_user(new_user).await {
        Ok(admin) => {
            info!("Admin {} created", admin.username);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                AdminResponse { admin },
                "Admin created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Admin creation failed")),
    }
}
