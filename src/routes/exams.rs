use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::candidates::requests::CandidateIdRequest;
use crate::models::exams::requests::{
    AddQuestionRequest, AddQuestionsRequest, CandidateExamRequest, CreateCategoryRequest,
    CreateExamRequest, ExamIdRequest, ExamReportRequest, QuestionIdRequest, SubmitExamRequest,
    UpdateExamRequest, UpdateQuestionRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::{CandidateExamService, ExamService};

static EXAM_SERVICE: Lazy<ExamService> = Lazy::new(ExamService::new_lazy);
static CANDIDATE_EXAM_SERVICE: Lazy<CandidateExamService> =
    Lazy::new(CandidateExamService::new_lazy);

pub async fn add_exam(
    req: HttpRequest,
    exam_data: web::Json<CreateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.create_exam(exam_data.into_inner(), &req).await
}

pub async fn list_exams(req: HttpRequest) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_exams(&req).await
}

pub async fn exam_detail(
    req: HttpRequest,
    id_data: web::Json<ExamIdRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .get_exam_detail(id_data.into_inner(), &req)
        .await
}

pub async fn update_exam(
    req: HttpRequest,
    exam_data: web::Json<UpdateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.update_exam(exam_data.into_inner(), &req).await
}

pub async fn delete_exam(
    req: HttpRequest,
    id_data: web::Json<ExamIdRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.delete_exam(id_data.into_inner(), &req).await
}

pub async fn add_question(
    req: HttpRequest,
    question_data: web::Json<AddQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .add_question(question_data.into_inner(), &req)
        .await
}

pub async fn add_multiple_questions(
    req: HttpRequest,
    questions_data: web::Json<AddQuestionsRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .add_questions(questions_data.into_inner(), &req)
        .await
}

pub async fn update_question(
    req: HttpRequest,
    question_data: web::Json<UpdateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .update_question(question_data.into_inner(), &req)
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    id_data: web::Json<QuestionIdRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .delete_question(id_data.into_inner(), &req)
        .await
}

pub async fn assign_candidate(
    req: HttpRequest,
    assign_data: web::Json<CandidateExamRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .assign_candidate(assign_data.into_inner(), &req)
        .await
}

pub async fn list_categories(req: HttpRequest) -> ActixResult<HttpResponse> {
    EXAM_SERVICE.list_categories(&req).await
}

pub async fn add_category(
    req: HttpRequest,
    category_data: web::Json<CreateCategoryRequest>,
) -> ActixResult<HttpResponse> {
    EXAM_SERVICE
        .create_category(category_data.into_inner(), &req)
        .await
}

pub async fn candidate_exam_list(
    req: HttpRequest,
    id_data: web::Json<CandidateIdRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_EXAM_SERVICE
        .list_exams(id_data.into_inner(), &req)
        .await
}

pub async fn candidate_exam_detail(
    req: HttpRequest,
    exam_data: web::Json<CandidateExamRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_EXAM_SERVICE
        .get_exam_detail(exam_data.into_inner(), &req)
        .await
}

pub async fn submit_exam(
    req: HttpRequest,
    submit_data: web::Json<SubmitExamRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_EXAM_SERVICE
        .submit_exam(submit_data.into_inner(), &req)
        .await
}

pub async fn exam_report(
    req: HttpRequest,
    report_data: web::Json<ExamReportRequest>,
) -> ActixResult<HttpResponse> {
    CANDIDATE_EXAM_SERVICE
        .exam_report(report_data.into_inner(), &req)
        .await
}

pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/exams")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/add", web::post().to(add_exam))
            .route("/list", web::post().to(list_exams))
            .route("/detail", web::post().to(exam_detail))
            .route("/update", web::post().to(update_exam))
            .route("/delete", web::post().to(delete_exam))
            .route("/add_question", web::post().to(add_question))
            .route(
                "/add_multiple_questions",
                web::post().to(add_multiple_questions),
            )
            .route("/update_question", web::post().to(update_question))
            .route("/delete_question", web::post().to(delete_question))
            .route("/assign_candidate", web::post().to(assign_candidate))
            // 旧客户端使用 /admin/categories 前缀
            .route("/categories/list", web::post().to(list_categories))
            .route("/categories/add", web::post().to(add_category))
            .route("/admin/categories/list", web::post().to(list_categories))
            .route("/admin/categories/add", web::post().to(add_category)),
    )
    .service(
        web::scope("/api/candidate/exams")
            .wrap(RequireApiKey)
            .route("/list", web::post().to(candidate_exam_list))
            .route("/detail", web::post().to(candidate_exam_detail))
            .route("/submit", web::post().to(submit_exam))
            .route("/exam_report", web::post().to(exam_report)),
    );
}
