use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::candidates::requests::CandidateIdRequest;
use crate::models::study_materials::requests::{
    AssignStudyRequest, CandidateStudyRequest, StudyMaterialIdRequest, StudyMaterialRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::StudyMaterialService;

static STUDY_MATERIAL_SERVICE: Lazy<StudyMaterialService> =
    Lazy::new(StudyMaterialService::new_lazy);

pub async fn add_material(
    req: HttpRequest,
    material_data: web::Json<StudyMaterialRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .create_material(material_data.into_inner(), &req)
        .await
}

pub async fn list_materials(req: HttpRequest) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE.list_materials(&req).await
}

pub async fn material_detail(
    req: HttpRequest,
    id_data: web::Json<StudyMaterialIdRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .get_material_detail(id_data.into_inner(), &req)
        .await
}

pub async fn update_material(
    req: HttpRequest,
    material_data: web::Json<StudyMaterialRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .update_material(material_data.into_inner(), &req)
        .await
}

pub async fn delete_material(
    req: HttpRequest,
    id_data: web::Json<StudyMaterialIdRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .delete_material(id_data.into_inner(), &req)
        .await
}

pub async fn add_candidate_to_study(
    req: HttpRequest,
    assign_data: web::Json<AssignStudyRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .assign_to_candidate(assign_data.into_inner(), &req)
        .await
}

pub async fn candidate_materials(
    req: HttpRequest,
    id_data: web::Json<CandidateIdRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .list_candidate_materials(id_data.into_inner(), &req)
        .await
}

pub async fn candidate_material_detail(
    req: HttpRequest,
    study_data: web::Json<CandidateStudyRequest>,
) -> ActixResult<HttpResponse> {
    STUDY_MATERIAL_SERVICE
        .get_candidate_material(study_data.into_inner(), &req)
        .await
}

pub fn configure_study_material_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/study_materials")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/add", web::post().to(add_material))
            .route("/list", web::post().to(list_materials))
            .route("/detail", web::post().to(material_detail))
            .route("/update", web::post().to(update_material))
            .route("/delete", web::post().to(delete_material))
            .route(
                "/add_candidate_to_study",
                web::post().to(add_candidate_to_study),
            ),
    )
    .service(
        web::scope("/api/candidate/study_materials")
            .wrap(RequireApiKey)
            .route("/list", web::post().to(candidate_materials))
            .route("/detail_study", web::post().to(candidate_material_detail)),
    );
}
