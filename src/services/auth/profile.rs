use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AuthService;
use crate::middlewares::RequireSession;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{
        requests::ProfileLookupRequest,
        responses::{CandidateProfileResponse, ProfileResponse},
    },
    common::require,
};
use crate::services::{field_error_response, not_found_response, storage_error_response};

fn session_required() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Authentication required",
    ))
}

async fn profile_by_username(
    service: &AuthService,
    username: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.get_user_by_username(username).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            ProfileResponse { profile },
            "Profile retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(ErrorCode::UserNotFound, "User not found")),
        Err(e) => Ok(storage_error_response(e, "Profile lookup failed")),
    }
}

pub async fn handle_profile(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireSession::extract_claims(request) {
        Some(claims) => profile_by_username(service, claims.username(), request).await,
        None => Ok(session_required()),
    }
}

pub async fn handle_get_profile(
    service: &AuthService,
    lookup: ProfileLookupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let username = match require(lookup.username, "username") {
        Ok(username) => username,
        Err(e) => return Ok(field_error_response(e)),
    };
    profile_by_username(service, &username, request).await
}

pub async fn handle_candidate_profile(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireSession::extract_user_id(request) else {
        return Ok(session_required());
    };

    let storage = service.get_storage(request)?;
    match storage.get_candidate_profile_by_user_id(user_id).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CandidateProfileResponse { profile },
            "Candidate profile retrieved successfully",
        ))),
        Ok(None) => Ok(not_found_response(
            ErrorCode::CandidateNotFound,
            "Candidate profile not found",
        )),
        Err(e) => Ok(storage_error_response(e, "Candidate profile lookup failed")),
    }
}
