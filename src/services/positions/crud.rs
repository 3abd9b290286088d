use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::PositionService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::require,
    positions::{
        requests::{PositionIdRequest, PositionRequest},
        responses::{PositionListResponse, PositionResponse},
    },
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

const POSITION_NOT_FOUND: &str = "Position not found";

pub async fn list_positions(
    service: &PositionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_positions().await {
        Ok(positions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PositionListResponse {
                total: positions.len(),
                positions,
            },
            "Positions retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list positions")),
    }
}

pub async fn get_position(
    service: &PositionService,
    id_request: PositionIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = match require(id_request.position_id, "position_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.get_position(id).await {
        Ok(Some(position)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PositionResponse { position },
            "Position retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::PositionNotFound, POSITION_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Failed to get position")),
    }
}

pub async fn create_position(
    service: &PositionService,
    position_request: PositionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let input = match position_request.into_input() {
        Ok(input) => input,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.create_position(input).await {
        Ok(position) => {
            info!("Position {} created", position.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                PositionResponse { position },
                "Position created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Position creation failed")),
    }
}

pub async fn update_position(
    service: &PositionService,
    position_request: PositionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (id, input) = match position_request.into_update() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_position(id, input).await {
        Ok(Some(position)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            PositionResponse { position },
            "Position updated successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::PositionNotFound, POSITION_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Position update failed")),
    }
}

pub async fn delete_position(
    service: &PositionService,
    id_request: PositionIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let id = match require(id_request.position_id, "position_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 关联的应聘记录随职位一起删除
    match storage.delete_position(id).await {
        Ok(true) => {
            info!("Position {} deleted", id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Position deleted successfully")))
        }
        Ok(false) => Ok(not_found_response(ErrorCode::PositionNotFound, POSITION_NOT_FOUND)),
        Err(e) => Ok(storage_error_response(e, "Position deletion failed")),
    }
}
