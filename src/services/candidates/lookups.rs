use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CandidateService;
use crate::models::{
    ApiResponse, positions::responses::PositionListResponse,
    statuses::responses::StatusListResponse,
};
use crate::services::storage_error_response;

// 分配职位时的下拉数据

pub async fn list_positions(
    service: &CandidateService,
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

pub async fn list_statuses(
    service: &CandidateService,
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
