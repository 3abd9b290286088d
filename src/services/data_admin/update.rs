use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::DataAdminService;
use crate::models::{
    ApiResponse, ErrorCode,
    users::{requests::UpdateUserRequest, responses::AdminResponse},
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

pub async fn update_admin(
    service: &DataAdminService,
    update_request: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (id, update) = match update_request.into_update() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_user(id, update).await {
        Ok(Some(admin)) => {
            info!("Admin {} updated", admin.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AdminResponse { admin },
                "Admin updated successfully",
            )))
        }
        Ok(None) => Ok(not_found_response(ErrorCode::UserNotFound, "Admin not found")),
        Err(e) => Ok(storage_error_response(e, "Admin update failed")),
    }
}
