use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudyMaterialService;
use crate::models::{
    ApiResponse, ErrorCode,
    common::require,
    study_materials::{
        requests::{StudyMaterialIdRequest, StudyMaterialRequest},
        responses::{
            StudyMaterialDetailResponse, StudyMaterialListResponse, StudyMaterialResponse,
        },
    },
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

const MATERIAL_NOT_FOUND: &str = "Study material not found";

pub async fn create_material(
    service: &StudyMaterialService,
    material_request: StudyMaterialRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (created_by, input) = match material_request.into_create() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.create_study_material(created_by, input).await {
        Ok(material) => {
            info!("Study material {} created by user {}", material.id, created_by);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                StudyMaterialResponse { material },
                "Study material created successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Study material creation failed")),
    }
}

pub async fn list_materials(
    service: &StudyMaterialService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_study_materials().await {
        Ok(materials) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudyMaterialListResponse {
                total: materials.len(),
                materials,
            },
            "Study materials retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list study materials")),
    }
}

pub async fn get_material_detail(
    service: &StudyMaterialService,
    id_request: StudyMaterialIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let material_id = match require(id_request.material_id, "material_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.get_study_material_detail(material_id).await {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudyMaterialDetailResponse { material },
            "Study material detail retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::StudyMaterialNotFound,
            MATERIAL_NOT_FOUND,
        )),
        Err(e) => Ok(storage_error_response(e, "Failed to get study material")),
    }
}

pub async fn update_material(
    service: &StudyMaterialService,
    material_request: StudyMaterialRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (material_id, input) = match material_request.into_update() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_study_material(material_id, input).await {
        Ok(Some(material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudyMaterialResponse { material },
            "Study material updated successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::StudyMaterialNotFound,
            MATERIAL_NOT_FOUND,
        )),
        Err(e) => Ok(storage_error_response(e, "Study material update failed")),
    }
}

pub async fn delete_material(
    service: &StudyMaterialService,
    id_request: StudyMaterialIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let material_id = match require(id_request.material_id, "material_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 分配记录与资料在同一事务内删除
    match storage.delete_study_material(material_id).await {
        Ok(true) => {
            info!("Study material {} deleted", material_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Study material deleted successfully",
            )))
        }
        Ok(false) => Ok(not_found_response(
            ErrorCode::StudyMaterialNotFound,
            MATERIAL_NOT_FOUND,
        )),
        Err(e) => Ok(storage_error_response(e, "Study material deletion failed")),
    }
}
