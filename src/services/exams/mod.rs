pub mod assign;
pub mod categories;
pub mod crud;
pub mod questions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::exams::requests::{
    AddQuestionRequest, AddQuestionsRequest, CandidateExamRequest, CreateCategoryRequest,
    CreateExamRequest, ExamIdRequest, QuestionIdRequest, UpdateExamRequest,
    UpdateQuestionRequest,
};
use crate::storage::Storage;

/// 管理端考试、题目与分类
pub struct ExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl ExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub async fn create_exam(
        &self,
        create_request: CreateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::create_exam(self, create_request, request).await
    }

    pub async fn list_exams(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        crud::list_exams(self, request).await
    }

    pub async fn get_exam_detail(
        &self,
        id_request: ExamIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::get_exam_detail(self, id_request, request).await
    }

    pub async fn update_exam(
        &self,
        update_request: UpdateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::update_exam(self, update_request, request).await
    }

    pub async fn delete_exam(
        &self,
        id_request: ExamIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        crud::delete_exam(self, id_request, request).await
    }

    pub async fn add_question(
        &self,
        question_request: AddQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::add_question(self, question_request, request).await
    }

    pub async fn add_questions(
        &self,
        questions_request: AddQuestionsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::add_questions(self, questions_request, request).await
    }

    pub async fn update_question(
        &self,
        question_request: UpdateQuestionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::update_question(self, question_request, request).await
    }

    pub async fn delete_question(
        &self,
        id_request: QuestionIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, id_request, request).await
    }

    pub async fn assign_candidate(
        &self,
        assign_request: CandidateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assign::assign_candidate(self, assign_request, request).await
    }

    pub async fn list_categories(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        categories::list_categories(self, request).await
    }

    pub async fn create_category(
        &self,
        category_request: CreateCategoryRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        categories::create_category(self, category_request, request).await
    }
}
