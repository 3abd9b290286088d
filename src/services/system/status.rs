use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use tracing::error;

use super::SystemService;
use crate::models::{
    AppStartTime,
    system::responses::{AppStatusResponse, DatabaseHealth},
};

/// 不走统一信封，数据库不可用时仍返回 200
pub async fn app_status(
    service: &SystemService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let database = match storage.ping().await {
        Ok(()) => DatabaseHealth::Connected,
        Err(e) => {
            error!("Database connection error: {}", e);
            DatabaseHealth::Error
        }
    };

    let uptime = request
        .app_data::<web::Data<AppStartTime>>()
        .map(|start| start.uptime_seconds())
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(AppStatusResponse {
        project: "running",
        uptime,
        version: service.get_config().app.version.clone(),
        database,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Storage, sea_orm_storage::SeaOrmStorage};
    use actix_web::{App, http::StatusCode, test};
    use sea_orm::{ConnectOptions, Database};
    use serde_json::Value;
    use std::sync::Arc;

    async fn status_handler(request: HttpRequest) -> ActixResult<HttpResponse> {
        SystemService::new_lazy().app_status(&request).await
    }

    #[actix_web::test]
    async fn test_app_status_reports_connected_database() {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("connect sqlite");
        let storage: Arc<dyn Storage> = Arc::new(
            SeaOrmStorage::from_connection(db)
                .await
                .expect("run migrations"),
        );

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(AppStartTime::now()))
                .route("/app-status", web::get().to(status_handler)),
        )
        .await;

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/app-status").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["project"], "running");
        assert_eq!(body["database"], "connected");
        assert!(body["uptime"].as_i64().is_some());
    }
}
