use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::candidates::requests::{
    ApplicationStatusRequest, CandidateIdRequest, CreateCandidateRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CandidateService;

static CANDIDATE_SERVICE: Lazy<CandidateService> = Lazy::new(CandidateService::new_lazy);

pub async fn add_candidate(
    req: HttpRequest,
    candidate_data: web::Json<CreateCandidateRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE
        .create_candidate(candidate_data.into_inner(), &req)
        .await
}

pub async fn list_candidates(req: HttpRequest) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE.list_candidates(&req).await
}

pub async fn candidate_detail(
    req: HttpRequest,
    id_data: web::Json<CandidateIdRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE
        .get_candidate_detail(id_data.into_inner(), &req)
        .await
}

pub async fn list_positions(req: HttpRequest) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE.list_positions(&req).await
}

pub async fn list_statuses(req: HttpRequest) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE.list_statuses(&req).await
}

pub async fn status_candidate(
    req: HttpRequest,
    id_data: web::Json<CandidateIdRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE
        .list_application_statuses(id_data.into_inner(), &req)
        .await
}

pub async fn position_candidate(
    req: HttpRequest,
    id_data: web::Json<CandidateIdRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE
        .list_applied_positions(id_data.into_inner(), &req)
        .await
}

pub async fn update_status(
    req: HttpRequest,
    status_data: web::Json<ApplicationStatusRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE
        .update_application_status(status_data.into_inner(), &req)
        .await
}

pub async fn assign_position(
    req: HttpRequest,
    status_data: web::Json<ApplicationStatusRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_SERVICE
        .assign_position(status_data.into_inner(), &req)
        .await
}

pub fn configure_candidate_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/candidates")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/add", web::post().to(add_candidate))
            .route("/list", web::post().to(list_candidates))
            .route("/detail", web::post().to(candidate_detail))
            .route("/list_position", web::post().to(list_positions))
            .route("/list_status", web::post().to(list_statuses))
            .route("/status_candidate", web::post().to(status_candidate))
            .route("/position_candidate", web::post().to(position_candidate))
            .route("/update_status", web::post().to(update_status))
            .route("/assign", web::post().to(assign_position)),
    );
}
