pub mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::positions::requests::{PositionIdRequest, PositionRequest};
use crate::storage::Storage;

pub struct PositionService {
    storage: Option<Arc<dyn Storage>>,
}

impl PositionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_positions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::list_positions(self, request).await
    }

    pub async fn get_position(
        &self,
        id_request: PositionIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::get_position(self, id_request, request).await
    }

    pub async fn create_position(
        &self,
        position_request: PositionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create_position(self, position_request, request).await
    }

    pub async fn update_position(
        &self,
        position_request: PositionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update_position(self, position_request, request).await
    }

    pub async fn delete_position(
        &self,
        id_request: PositionIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::delete_position(self, id_request, request).await
    }
}
