use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::statuses::requests::{StatusIdRequest, StatusRequest};
use crate::models::users::entities::UserRole;
use crate::services::StatusService;

static STATUS_SERVICE: Lazy<StatusService> = Lazy::new(StatusService::new_lazy);

pub async fn list_statuses(req: HttpRequest) -> ActixResult<HttpResponse> {
    STATUS_SERVICE.list_statuses(&req).await
}

pub async fn status_detail(
    req: HttpRequest,
    id_data: web::Json<StatusIdRequest>,
) -> ActixResult<HttpResponse> {
    STATUS_SERVICE.get_status(id_data.into_inner(), &req).await
}

pub async fn add_status(
    req: HttpRequest,
    status_data: web::Json<StatusRequest>,
) -> ActixResult<HttpResponse> {
    STATUS_SERVICE
        .create_status(status_data.into_inner(), &req)
        .await
}

pub async fn update_status(
    req: HttpRequest,
    status_data: web::Json<StatusRequest>,
) -> ActixResult<HttpResponse> {
    STATUS_SERVICE
        .update_status(status_data.into_inner(), &req)
        .await
}

pub async fn delete_status(
    req: HttpRequest,
    id_data: web::Json<StatusIdRequest>,
) -> ActixResult<HttpResponse> {
    STATUS_SERVICE
        .delete_status(id_data.into_inner(), &req)
        .await
}

pub fn configure_status_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/statuses")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/list", web::post().to(list_statuses))
            .route("/detail", web::post().to(status_detail))
            .route("/add", web::post().to(add_status))
            .route("/update", web::post().to(update_status))
            .route("/delete", web::post().to(delete_status)),
    );
}
