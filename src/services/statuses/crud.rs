use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StatusService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::require,
    statuses::{
        requests::{StatusIdRequest, StatusRequest},
        responses::{StatusListResponse, StatusResponse},
    },
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

const STATUS_NOT_FOUND: &str = "Status not found";

pub async fn list_statuses(
    service: &StatusService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_statuses().await {
        Ok(statuses) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StatusListResponse {
                total: statuses.len(),
                statuses,
            },
            "Statuses retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list statuses")),
    }
}

pub async fn get_status(
    service: &StatusService,
    id_request: StatusIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = match require(id_request.status_id, "status_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.get_status(id).await {
        Ok(Some(status_data)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StatusResponse { status_data },
            "Status retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::StatusNotFound, STATUS_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Failed to get status")),
    }
}

pub async fn create_status(
    service: &StatusService,
    status_request: StatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let status_name = match status_request.into_name() {
        Ok(name) => name,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.create_status(status_name).await {
        Ok(status_data) => {
            info!("Status {} created", status_data.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StatusResponse { status_data },
                "Status created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Status creation failed")),
    }
}

pub async fn update_status(
    service: &StatusService,
    status_request: StatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (id, status_name) = match status_request.into_update() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_status(id, status_name).await {
        Ok(Some(status_data)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StatusResponse { status_data },
            "Status updated successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::StatusNotFound, STATUS_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Status update failed")),
    }
}

pub async fn delete_status(
    service: &StatusService,
    id_request: StatusIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = match require(id_request.status_id, "status_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.delete_status(id).await {
        Ok(true) => {
            info!("Status {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Status deleted successfully")))
        }
        Ok(false) => Ok(not_found_response(ErrorCode::StatusNotFound, STATUS_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Status deletion failed")),
    }
}
