use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::StudyMaterialService;
use crate::models::{
    ApiResponse, ErrorCode,
    candidates::requests::CandidateIdRequest,
    common::require,
    study_materials::{
        requests::CandidateStudyRequest,
        responses::{CandidateStudyDetailResponse, CandidateStudyListResponse},
    },
};
use crate::services::{
    field_error_response, find_candidate, not_found_response, storage_error_response,
};

pub async fn list_candidate_materials(
    service: &StudyMaterialService,
    id_request: CandidateIdRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(id_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    if let Err(response) = find_candidate(&storage, candidate_id).await {
        return Ok(response);
    }

    match storage.list_candidate_study_materials(candidate_id).await {
        Ok(study_materials) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateStudyListResponse {
                candidate_id,
                total: study_materials.len(),
                study_materials,
            },
            "Study materials retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list study materials")),
    }
}

pub async fn get_candidate_material(
    service: &StudyMaterialService,
    study_request: CandidateStudyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let candidate_id = match require(study_request.candidate_id, "candidate_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };
    let study_id = match require(study_request.study_id, "study_id") {
        Ok(id) => id,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage
        .get_candidate_study_material(candidate_id, study_id)
        .await
    {
        Ok(Some(study_material)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateStudyDetailResponse { study_material },
            "Study material retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::StudyMaterialNotFound,
            "Study material not assigned to this candidate",
        )),
        Err(e) => Ok(storage_error_response(e, "Failed to get study material")),
    }
}
