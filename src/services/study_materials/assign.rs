use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::StudyMaterialService;
use crate::models::{
    ApiResponse,
    study_materials::{requests::AssignStudyRequest, responses::StudyAssignmentResponse},
};
use crate::services::{field_error_response, storage_error_response};

/// 已分配的刷新访问时间，未分配的新建；任一资料不存在则整体不写入
pub async fn assign_to_candidate(
    service: &StudyMaterialService,
    assign_request: AssignStudyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (study_ids, candidate_id) = match assign_request.into_parts() {
        Ok(parts) => parts,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    match storage.assign_study_materials(candidate_id, study_ids).await {
        Ok(result) => {
            info!(
                "Study materials assigned to candidate {}: created {:?}, updated {:?}",
                candidate_id, result.created_study_ids, result.updated_study_ids
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                StudyAssignmentResponse { result },
                "Study materials assigned successfully",
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Study material assignment failed")),
    }
}
