use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::positions::requests::{PositionIdRequest, PositionRequest};
use crate::models::users::entities::UserRole;
use crate::services::PositionService;

static POSITION_SERVICE: Lazy<PositionService> = Lazy::new(PositionService::new_lazy);

pub async fn list_positions(req: HttpRequest) -> ActixResult<HttpResponse> {
    POSITION_SERVICE.list_positions(&req).await
}

pub async fn position_detail(
    req: HttpRequest,
    id_data: web::Json<PositionIdRequest>,
) -> ActixResult<HttpResponse> {
    POSITION_SERVICE
        .get_position(id_data.into_inner(), &req)
        .await
}

pub async fn add_position(
    req: HttpRequest,
    position_data: web::Json<PositionRequest>,
) -> ActixResult<HttpResponse> {
    POSITION_SERVICE
        .create_position(position_data.into_inner(), &req)
        .await
}

pub async fn update_position(
    req: HttpRequest,
    position_data: web::Json<PositionRequest>,
) -> ActixResult<HttpResponse> {
    POSITION_SERVICE
        .update_position(position_data.into_inner(), &req)
        .await
}

pub async fn delete_position(
    req: HttpRequest,
    id_data: web::Json<PositionIdRequest>,
) -> ActixResult<HttpResponse> {
    POSITION_SERVICE
        .delete_position(id_data.into_inner(), &req)
        .await
}

pub fn configure_position_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/positions")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/list", web::post().to(list_positions))
            .route("/detail", web::post().to(position_detail))
            .route("/add", web::post().to(add_position))
            .route("/update", web::post().to(update_position))
            .route("/delete", web::post().to(delete_position)),
    );
}
