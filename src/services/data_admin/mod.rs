pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest, UserIdRequest};
use crate::storage::Storage;

/// 超级管理员维护管理员账号
pub struct DataAdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl DataAdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn create_admin(
        &self,
        create_request: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_admin(self, create_request, request).await
    }

    pub async fn list_admins(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_admins(self, request).await
    }

    pub async fn get_admin(
        &self,
        id_request: UserIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_admin(self, id_request, request).await
    }

    pub async fn update_admin(
        &self,
        update_request: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_admin(self, update_request, request).await
    }

    pub async fn delete_admin(
        &self,
        id_request: UserIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_admin(self, id_request, request).await
    }
}
