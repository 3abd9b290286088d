use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::DataAdminService;
use crate::models::{
    ApiResponse,
    users::{entities::UserRole, responses::AdminListResponse},
};
use crate::services::storage_error_response;

pub async fn list_admins(
    service: &DataAdminService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_users_by_role(UserRole::Admin).await {
        Ok(admins) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            AdminListResponse {
                total: admins.len(),
                admins,
            },
            "Admins retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list admins")),
    }
}
