use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::users::{
    entities::UserRole,
    requests::{CreateUserRequest, UpdateUserRequest, UserIdRequest},
};
use crate::services::DataAdminService;

static DATA_ADMIN_SERVICE: Lazy<DataAdminService> = Lazy::new(DataAdminService::new_lazy);

pub async fn add_admin(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    DATA_ADMIN_SERVICE
        .create_admin(user_data.into_inner(), &req)
        .await
}

pub async fn list_admins(req: HttpRequest) -> ActixResult<HttpResponse> {
    DATA_ADMIN_SERVICE.list_admins(&req).await
}

pub async fn admin_detail(
    req: HttpRequest,
    id_data: web::Json<UserIdRequest>,
) -> ActixResult<HttpResponse> {
    DATA_ADMIN_SERVICE.get_admin(id_data.into_inner(), &req).await
}

pub async fn update_admin(
    req: HttpRequest,
    update_data: web::Json<UpdateUserRequest>,
) -> ActixResult<HttpResponse> {
    DATA_ADMIN_SERVICE
        .update_admin(update_data.into_inner(), &req)
        .await
}

pub async fn delete_admin(
    req: HttpRequest,
    id_data: web::Json<UserIdRequest>,
) -> ActixResult<HttpResponse> {
    DATA_ADMIN_SERVICE
        .delete_admin(id_data.into_inner(), &req)
        .await
}

// 仅超级管理员可用
pub fn configure_data_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/data_admin")
            .wrap(RequireRole::new(&UserRole::SuperAdmin))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/add", web::post().to(add_admin))
            .route("/list", web::post().to(list_admins))
            .route("/detail", web::post().to(admin_detail))
            .route("/update", web::post().to(update_admin))
            .route("/delete", web::post().to(delete_admin)),
    );
}
