use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::config::AppConfig;
use crate::middlewares::{RateLimit, RequireApiKey, RequireRole, RequireSession};
use crate::models::auth::requests::{LoginRequest, ProfileLookupRequest, TokenRequest};
use crate::models::users::{entities::UserRole, requests::CreateUserRequest};
use crate::services::{AuthService, auth::LoginPortal};

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

/// 退出登录的令牌：请求头优先，其次是请求体
fn logout_token(req: &HttpRequest, body: Option<web::Json<TokenRequest>>) -> Option<String> {
    let header = &AppConfig::get().auth.token_header;
    req.headers()
        .get(header.as_str())
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .or_else(|| body.and_then(|b| b.into_inner().token))
}

pub async fn admin_login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(login_data.into_inner(), LoginPortal::Admin, &req)
        .await
}

pub async fn candidate_login(
    req: HttpRequest,
    login_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE
        .login(login_data.into_inner(), LoginPortal::Candidate, &req)
        .await
}

pub async fn register(
    req: HttpRequest,
    user_data: web::Json<CreateUserRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.register(user_data.into_inner(), &req).await
}

pub async fn profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.profile(&req).await
}

pub async fn get_profile(
    req: HttpRequest,
    lookup: web::Json<ProfileLookupRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.get_profile(lookup.into_inner(), &req).await
}

pub async fn candidate_profile(req: HttpRequest) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.candidate_profile(&req).await
}

pub async fn logout(
    req: HttpRequest,
    body: Option<web::Json<TokenRequest>>,
) -> ActixResult<HttpResponse> {
    let token = logout_token(&req, body);
    AUTH_SERVICE.logout(token, &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(RequireApiKey)
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(admin_login)),
            )
            .service(
                web::resource("/register")
                    .wrap(RateLimit::register())
                    .route(web::post().to(register)),
            )
            .service(
                web::resource("/profile")
                    .wrap(RequireSession)
                    .route(web::get().to(profile)),
            )
            .service(
                web::resource("/getProfile")
                    .wrap(RequireRole::new_any(UserRole::admin_roles()))
                    .wrap(RequireSession)
                    .route(web::post().to(get_profile)),
            )
            .route("/logout", web::post().to(logout)),
    )
    .service(
        web::scope("/api/candidate/auth")
            .wrap(RequireApiKey)
            .service(
                web::resource("/login")
                    .wrap(RateLimit::login())
                    .route(web::post().to(candidate_login)),
            )
            .service(
                web::resource("/profile_candidate")
                    .wrap(RequireSession)
                    .route(web::post().to(candidate_profile)),
            )
            .route("/logout", web::post().to(logout)),
    );
}
