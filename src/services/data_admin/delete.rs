use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DataAdminService;
use crate::{
    middlewares::RequireSession,
    models::{ApiResponse, ErrorCode, common::require, users::requests::UserIdRequest},
    services::{field_error_response, not_found_response, storage_error_response},
};

pub async fn delete_admin(
    service: &DataAdminService,
    id_request: UserIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = match require(id_request.id, "id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    // 禁止删除当前登录的超级管理员
    if RequireSession::extract_user_id(request) == Some(id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CanNotDeleteCurrentUser,
            "Cannot delete current user",
        )));
    }

    let storage = service.get_storage(request)?;
    match storage.delete_user(id).await {
        Ok(true) => {
            info!("Admin {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Admin deleted successfully")))
        }
        Ok(false) => Ok(not_found_response(ErrorCode::UserNotFound, "Admin not found")),
        Err(e) => Ok(storage_error_response(e, "Admin deletion failed")),
    }
}
