pub mod login;
pub mod logout;
pub mod profile;
pub mod register;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;
use tracing::error;

use crate::cache::SessionStore;
use crate::config::AppConfig;
use crate::models::{
    auth::requests::{LoginRequest, ProfileLookupRequest},
    users::requests::CreateUserRequest,
};
use crate::storage::Storage;

/// 登录端类型，候选人端登录额外返回 user_id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPortal {
    Admin,
    Candidate,
}

pub struct AuthService {
    storage: Option<Arc<dyn Storage>>,
}

impl AuthService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub(crate) fn get_sessions(&self, request: &HttpRequest) -> ActixResult<SessionStore> {
        request
            .app_data::<web::Data<SessionStore>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                error!("SessionStore not found in app data");
                actix_web::error::ErrorInternalServerError("Session store unavailable")
            })
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 登录并写入会话
    pub async fn login(
        &self,
        login_request: LoginRequest,
        portal: LoginPortal,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        login::handle_login(self, login_request, portal, request).await
    }

    // 管理端注册
    pub async fn register(
        &self,
        create_request: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        register::handle_register(self, create_request, request).await
    }

    // 当前会话用户资料
    pub async fn profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_profile(self, request).await
    }

    // 管理员按用户名查询资料
    pub async fn get_profile(
        &self,
        lookup: ProfileLookupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        profile::handle_get_profile(self, lookup, request).await
    }

    // 候选人档案
    pub async fn candidate_profile(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        profile::handle_candidate_profile(self, request).await
    }

    // 退出登录
    pub async fn logout(
        &self,
        token: Option<String>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        logout::handle_logout(self, token, request).await
    }
}
