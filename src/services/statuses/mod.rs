pub mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::statuses::requests::{StatusIdRequest, StatusRequest};
use crate::storage::Storage;

pub struct StatusService {
    storage: Option<Arc<dyn Storage>>,
}

impl StatusService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_statuses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::list_statuses(self, request).await
    }

    pub async fn get_status(
        &self,
        id_request: StatusIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::get_status(self, id_request, request).await
    }

    pub async fn create_status(
        &self,
        status_request: StatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create_status(self, status_request, request).await
    }

    pub async fn update_status(
        &self,
        status_request: StatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update_status(self, status_request, request).await
    }

    pub async fn delete_status(
        &self,
        id_request: StatusIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::delete_status(self, id_request, request).await
    }
}
