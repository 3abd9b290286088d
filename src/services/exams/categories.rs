use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ExamService;
use crate::models::{
    ApiResponse,
    common::require,
    exams::{
        requests::CreateCategoryRequest,
        responses::{CategoryListResponse, CategoryResponse},
    },
};
use crate::services::{field_error_response, storage_error_response};

pub async fn list_categories(
    service: &ExamService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    match storage.list_categories().await {
        Ok(categories) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CategoryListResponse {
                total: categories.len(),
                categories,
            },
            "Categories retrieved successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Failed to list categories")),
    }
}

pub async fn create_category(
    service: &ExamService,
    category_request: CreateCategoryRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let category = match require(category_request.category, "category") {
        Ok(category) => category,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.create_category(category).await {
        Ok(category) => Ok(HttpResponse::Created().json(ApiResponse::success(
            CategoryResponse { category },
            "Category created successfully",
        ))),
        Err(e) => Ok(storage_error_response(e, "Category creation failed")),
    }
}
