/*!
 * 全局 API 密钥中间件
 *
 * 所有 `/api/...` 下的路由都需要携带 `Authorization: Bearer <GLOBAL_API_KEY>`，
 * 缺失或不匹配时直接返回 401，不再进入后续中间件。
 *
 * ```rust,ignore
 * web::scope("/api/positions")
 *     .wrap(RequireRole::new_any(UserRole::admin_roles()))
 *     .wrap(RequireSession)
 *     .wrap(RequireApiKey) // 最后 wrap 的最先执行
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::AUTHORIZATION,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use super::create_error_response;
use crate::config::AppConfig;
use crate::models::ErrorCode;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct RequireApiKey;

/// 从 Authorization 头取出 Bearer 值
fn extract_api_key(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

impl<S, B> Transform<S, ServiceRequest> for RequireApiKey
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireApiKeyMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireApiKeyMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireApiKeyMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireApiKeyMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            let expected = &AppConfig::get().auth.global_api_key;
            match extract_api_key(&req) {
                Some(key) if key == expected => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                _ => {
                    info!("Rejected request to {}: invalid global API key", req.path());
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::InvalidApiKey,
                            "Invalid global API key",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    fn bearer(key: &str) -> (actix_web::http::header::HeaderName, String) {
        (AUTHORIZATION, format!("Bearer {key}"))
    }

    #[actix_web::test]
    async fn test_missing_key_is_rejected() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(RequireApiKey)
                    .route("/ping", web::post().to(ok_handler)),
            ),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::post().uri("/api/ping").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_matching_key_passes() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(RequireApiKey)
                    .route("/ping", web::post().to(ok_handler)),
            ),
        )
        .await;

        let key = AppConfig::get().auth.global_api_key.clone();
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/ping")
                .insert_header(bearer(&key))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/ping")
                .insert_header(bearer("wrong-key"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
