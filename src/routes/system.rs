use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::SystemService;

// 懒加载的全局 SystemService 实例
static SYSTEM_SERVICE: Lazy<SystemService> = Lazy::new(SystemService::new_lazy);

pub async fn app_status(request: HttpRequest) -> ActixResult<HttpResponse> {
    SYSTEM_SERVICE.app_status(&request).await
}

// 健康检查不需要 API 密钥
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/app-status", web::get().to(app_status));
}
