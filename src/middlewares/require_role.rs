/*!
 * 基于角色的访问控制中间件
 *
 * 此中间件必须在 RequireSession 中间件之后执行，用于验证会话用户是否具有特定角色。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::{RequireRole, RequireSession};
 * use crate::models::users::entities::UserRole;
 *
 * web::scope("/api/data_admin")
 *     .wrap(RequireRole::new(&UserRole::SuperAdmin)) // 再验证角色
 *     .wrap(RequireSession)                          // 先验证会话
 * ```
 *
 * 或者验证多个角色：
 *
 * ```rust,ignore
 * .wrap(RequireRole::new_any(UserRole::admin_roles()))  // 任一角色即可
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::{
    middlewares::RequireSession,
    models::{ErrorCode, users::entities::UserRole},
    utils::jwt::Claims,
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    required_roles: Vec<UserRole>,
}

impl RequireRole {
    /// 创建需要特定角色的中间件
    pub fn new(role: &UserRole) -> Self {
        Self {
            required_roles: vec![*role],
        }
    }

    /// 创建需要任一角色的中间件
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            required_roles: roles.iter().map(|r| **r).collect(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<UserRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required_roles = self.required_roles.clone();

        Box::pin(async move {
            // 从请求扩展中获取会话 Claims
            let has_claims = req.extensions().get::<Claims>().is_some();
            if !has_claims {
                info!(
                    "Role check failed: No session claims found in request. Make sure RequireSession middleware is applied first."
                );
                return Ok(req.into_response(
                    create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    )
                    .map_into_right_body(),
                ));
            }

            let user_role = RequireSession::extract_user_role(req.request());
            let has_permission = required_roles
                .iter()
                .any(|role| user_role.as_ref() == Some(role));

            if has_permission {
                let res = srv.call(req).await?.map_into_left_body();
                Ok(res)
            } else {
                info!(
                    "Access denied for user {:?} (role: {:?}). Required roles: {:?}",
                    RequireSession::extract_user_id(req.request()),
                    user_role,
                    required_roles
                );
                Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::Forbidden,
                        "Access denied",
                    )
                    .map_into_right_body(),
                ))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{SessionStore, object_cache::moka::MokaCacheWrapper};
    use crate::utils::jwt::JwtUtils;
    use actix_web::{App, HttpResponse, test, web};
    use serde_json::json;
    use std::sync::Arc;

    async fn ok_handler() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    async fn status_for(role: &str, required: RequireRole) -> StatusCode {
        let sessions = SessionStore::new(Arc::new(MokaCacheWrapper::with_capacity(100, 60)));
        let token = JwtUtils::generate_token(1, "someone", role).unwrap();
        sessions.store("someone", &token, 60).await;

        let app = test::init_service(
            App::new().app_data(web::Data::new(sessions)).service(
                web::scope("/api")
                    .wrap(required)
                    .wrap(RequireSession)
                    .route("/ping", web::post().to(ok_handler)),
            ),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/ping")
            .set_json(json!({ "token": token }))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_admin_roles_allow_admin_and_superadmin() {
        let required = || RequireRole::new_any(UserRole::admin_roles());
        assert_eq!(status_for("admin", required()).await, StatusCode::OK);
        assert_eq!(status_for("superadmin", required()).await, StatusCode::OK);
        assert_eq!(
            status_for("candidate", required()).await,
            StatusCode::FORBIDDEN
        );
    }

    #[actix_web::test]
    async fn test_superadmin_only() {
        let required = || RequireRole::new(&UserRole::SuperAdmin);
        assert_eq!(status_for("superadmin", required()).await, StatusCode::OK);
        assert_eq!(status_for("admin", required()).await, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_without_session_is_unauthorized() {
        let app = test::init_service(
            App::new().service(
                web::scope("/api")
                    .wrap(RequireRole::new(&UserRole::Admin))
                    .route("/ping", web::post().to(ok_handler)),
            ),
        )
        .await;

        let resp =
            test::call_service(&app, test::TestRequest::post().uri("/api/ping").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
