pub mod assign;
pub mod candidate;
pub mod crud;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    candidates::requests::CandidateIdRequest,
    study_materials::requests::{
        AssignStudyRequest, CandidateStudyRequest, StudyMaterialIdRequest, StudyMaterialRequest,
    },
};
use crate::storage::Storage;

/// 学习资料：管理端维护与分配，候选人端只读
pub struct StudyMaterialService {
    storage: Option<Arc<dyn Storage>>,
}

impl StudyMaterialService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn create_material(
        &self,
        material_request: StudyMaterialRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create_material(self, material_request, request).await
    }

    pub async fn list_materials(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::list_materials(self, request).await
    }

    pub async fn get_material_detail(
        &self,
        id_request: StudyMaterialIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::get_material_detail(self, id_request, request).await
    }

    pub async fn update_material(
        &self,
        material_request: StudyMaterialRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update_material(self, material_request, request).await
    }

    pub async fn delete_material(
        &self,
        id_request: StudyMaterialIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::delete_material(self, id_request, request).await
    }

    pub async fn assign_to_candidate(
        &self,
        assign_request: AssignStudyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_to_candidate(self, assign_request, request).await
    }

    pub async fn list_candidate_materials(
        &self,
        id_request: CandidateIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        candidate::list_candidate_materials(self, id_request, request).await
    }

    pub async fn get_candidate_material(
        &self,
        study_request: CandidateStudyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        candidate::get_candidate_material(self, study_request, request).await
    }
}
