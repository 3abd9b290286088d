use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::info;

use super::CandidateService;
use crate::models::{
    ApiResponse, ErrorCode,
    candidates::{
        requests::{ApplicationStatusRequest, CandidateIdRequest},
        responses::{
            AssignPositionResponse, CandidateApplicationsResponse, CandidatePositionsResponse,
        },
    },
    common::require,
};
use crate::services::{
    field_error_response, find_candidate, not_found_response, storage_error_response,
};

pub async fn list_application_statuses(
    service: &CandidateService,
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

    match storage.list_candidate_applications(candidate_id).await {
        Ok(applications) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateApplicationsResponse {
                candidate_id,
                applications,
            },
            "Candidate statuses retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list candidate statuses")),
    }
}

pub async fn list_applied_positions(
    service: &CandidateService,
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

    let applied: HashSet<i64> = match storage.list_candidate_applications(candidate_id).await {
        Ok(applications) => applications.iter().map(|a| a.position_id).collect(),
        Err(e) => return Ok(storage_error_response(e, "Failed to list candidate positions")),
    };

    match storage.list_positions().await {
        Ok(positions) => {
            let positions = positions
                .into_iter()
                .filter(|p| applied.contains(&p.id))
                .collect();
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                CandidatePositionsResponse {
                    candidate_id,
                    positions,
                },
                "Candidate positions retrieved successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Failed to list candidate positions")),
    }
}

pub async fn update_application_status(
    service: &CandidateService,
    status_request: ApplicationStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let change = match status_request.into_status() {
        Ok(change) => change,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.update_application_status(change).await {
        Ok(true) => {
            info!(
                "Candidate {} application for position {} moved to status {}",
                change.candidate_id, change.position_id, change.status_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty(
                "Candidate status updated successfully",
            )))
        }
        Ok(false) => Ok(not_found_response(
            ErrorCode::ApplicationNotFound,
            "Application not found for this candidate and position",
        )),
        Err(e) => Ok(storage_error_response(e, "Candidate status update failed")),
    }
}

pub async fn assign_position(
    service: &CandidateService,
    status_request: ApplicationStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let change = match status_request.into_status() {
        Ok(change) => change,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    // 候选人、职位、状态任一不存在时存储层返回 NotFound
    match storage.assign_position(change).await {
        Ok(outcome) => {
            let message = if outcome.created {
                "Position assigned successfully"
            } else {
                "Application status updated successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                AssignPositionResponse {
                    application_id: outcome.id,
                    created: outcome.created,
                    updated: !outcome.created,
                },
                message,
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Position assignment failed")),
    }
}
