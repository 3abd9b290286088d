/*!
 * 会话令牌中间件
 *
 * 校验登录时签发的会话令牌，确保只有当前有效会话才能访问受保护的路由。
 *
 * ## 令牌来源
 *
 * 1. 请求头 `X-Access-Token`（名称可通过 `auth.token_header` 配置，GET 请求使用）
 * 2. JSON 请求体中的 `token` 字段（POST 请求使用）
 *
 * 读取请求体后会把原始字节放回请求，后续处理程序仍可正常解析 JSON。
 *
 * ## 校验流程
 *
 * 1. 使用 JWT 密钥校验签名与过期时间
 * 2. 会话存储中 `token:{username}` 的值必须与该令牌完全一致（退出登录或重新登录后旧令牌失效）
 * 3. 通过后把 `Claims` 放入请求扩展，供 `RequireRole` 与处理程序读取
 *
 * ```rust,ignore
 * async fn handler(req: HttpRequest) -> HttpResponse {
 *     if let Some(claims) = RequireSession::extract_claims(&req) {
 *         return HttpResponse::Ok().body(claims.sub);
 *     }
 *     HttpResponse::Unauthorized().finish()
 * }
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpRequest,
    body::EitherBody,
    dev::{Payload, ServiceRequest, ServiceResponse},
    http::StatusCode,
    web,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::{debug, error, info};

use super::create_error_response;
use crate::cache::SessionStore;
use crate::config::AppConfig;
use crate::models::{ErrorCode, auth::requests::TokenRequest, users::entities::UserRole};
use crate::utils::jwt::{Claims, JwtUtils, TokenError};

#[derive(Clone)]
pub struct RequireSession;

/// 会话校验失败的原因，决定返回的错误码
struct Rejection {
    status: StatusCode,
    code: ErrorCode,
    message: &'static str,
}

impl Rejection {
    fn unauthorized(code: ErrorCode, message: &'static str) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            code,
            message,
        }
    }
}

impl From<TokenError> for Rejection {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => Self::unauthorized(ErrorCode::TokenExpired, err.message()),
            TokenError::Invalid => Self::unauthorized(ErrorCode::TokenInvalid, err.message()),
        }
    }
}

/// 先看请求头，再看请求体；读过的请求体原样放回
async fn extract_token(req: &mut ServiceRequest) -> Option<String> {
    let header = &AppConfig::get().auth.token_header;
    if let Some(token) = req
        .headers()
        .get(header.as_str())
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
    {
        return Some(token.to_string());
    }

    let body = match req.extract::<web::Bytes>().await {
        Ok(body) => body,
        Err(e) => {
            debug!("Failed to buffer request body for session check: {}", e);
            return None;
        }
    };
    let token = serde_json::from_slice::<TokenRequest>(&body)
        .ok()
        .and_then(|r| r.token);
    req.set_payload(Payload::from(body));
    token
}

async fn validate_session(req: &mut ServiceRequest) -> Result<Claims, Rejection> {
    let token = extract_token(req).await.ok_or_else(|| {
        Rejection::unauthorized(ErrorCode::TokenMissing, "Session token is required")
    })?;

    let claims = JwtUtils::verify_token(&token).map_err(|err| {
        info!("Session token verification failed: {}", err.message());
        Rejection::from(err)
    })?;

    let Some(sessions) = req.app_data::<web::Data<SessionStore>>() else {
        error!("SessionStore not found in app data");
        return Err(Rejection {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: ErrorCode::InternalServerError,
            message: "Session store unavailable",
        });
    };

    if !sessions.is_active(claims.username(), &token).await {
        info!("Session for user {} is no longer active", claims.username());
        return Err(Rejection::unauthorized(
            ErrorCode::SessionInvalid,
            "Token is invalid or has expired",
        ));
    }

    Ok(claims)
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
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

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            match validate_session(&mut req).await {
                Ok(claims) => {
                    debug!("Session authentication successful for {}", claims.sub);
                    req.extensions_mut().insert(claims);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(rejection) => {
                    info!(
                        "Session authentication failed for request to {}: {}",
                        req.path(),
                        rejection.message
                    );
                    Ok(req.into_response(
                        create_error_response(rejection.status, rejection.code, rejection.message)
                            .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取会话信息
impl RequireSession {
    /// 从请求扩展中提取 Claims
    /// 此函数应该在应用了 RequireSession 中间件的路由处理程序中使用
    pub fn extract_claims(req: &HttpRequest) -> Option<Claims> {
        req.extensions().get::<Claims>().cloned()
    }

    pub fn extract_user_id(req: &HttpRequest) -> Option<i64> {
        req.extensions().get::<Claims>().map(|claims| claims.uid)
    }

    /// 角色字符串无法识别时返回 None
    pub fn extract_user_role(req: &HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<Claims>()
            .and_then(|claims| claims.role.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;
    use actix_web::{App, HttpResponse, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    // 回显会话用户名与请求体，验证请求体被完整放回
    async fn echo(req: HttpRequest, body: web::Json<Value>) -> HttpResponse {
        let username = RequireSession::extract_claims(&req)
            .map(|c| c.sub)
            .unwrap_or_default();
        HttpResponse::Ok().json(json!({ "username": username, "body": body.into_inner() }))
    }

    async fn whoami(req: HttpRequest) -> HttpResponse {
        match RequireSession::extract_user_id(&req) {
            Some(id) => HttpResponse::Ok().body(id.to_string()),
            None => HttpResponse::InternalServerError().finish(),
        }
    }

    fn sessions() -> SessionStore {
        SessionStore::new(Arc::new(MokaCacheWrapper::with_capacity(100, 60)))
    }

    macro_rules! session_app {
        ($sessions:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($sessions.clone()))
                    .service(
                        web::scope("/api")
                            .wrap(RequireSession)
                            .route("/echo", web::post().to(echo))
                            .route("/whoami", web::get().to(whoami)),
                    ),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_body_token_passes_and_body_is_restored() {
        let sessions = sessions();
        let token = JwtUtils::generate_token(5, "recruiter", "admin").unwrap();
        sessions.store("recruiter", &token, 60).await;
        let app = session_app!(sessions);

        let req = test::TestRequest::post()
            .uri("/api/echo")
            .set_json(json!({ "token": token, "exam_id": 9 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["username"], "recruiter");
        assert_eq!(body["body"]["exam_id"], 9);
    }

    #[actix_web::test]
    async fn test_header_token_passes() {
        let sessions = sessions();
        let token = JwtUtils::generate_token(5, "recruiter", "admin").unwrap();
        sessions.store("recruiter", &token, 60).await;
        let app = session_app!(sessions);

        let req = test::TestRequest::get()
            .uri("/api/whoami")
            .insert_header(("X-Access-Token", token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, "5");
    }

    #[actix_web::test]
    async fn test_replaced_session_is_rejected() {
        let sessions = sessions();
        let old = JwtUtils::generate_token(5, "recruiter", "admin").unwrap();
        sessions.store("recruiter", "a-newer-token", 60).await;
        let app = session_app!(sessions);

        let req = test::TestRequest::post()
            .uri("/api/echo")
            .set_json(json!({ "token": old }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_missing_and_garbage_tokens() {
        let sessions = sessions();
        let app = session_app!(sessions);

        let req = test::TestRequest::post()
            .uri("/api/echo")
            .set_json(json!({ "exam_id": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/echo")
            .set_json(json!({ "token": "not-a-jwt" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
