use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DataAdminService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::require,
    users::{requests::UserIdRequest, responses::AdminResponse},
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

pub async fn get_admin(
    service: &DataAdminService,
    id_request: UserIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = match require(id_request.id, "id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.get_user_by_id(id).await {
        Ok(Some(admin)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdminResponse { admin },
            "Admin retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::UserNotFound, "Admin not found")),
        Err(e) => Ok(storage_error_response(e, "Failed to get admin")),
    }
}
