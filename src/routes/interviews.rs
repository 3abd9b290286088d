use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireApiKey, RequireRole, RequireSession};
use crate::models::candidates::requests::CandidateIdRequest;
use crate::models::interviews::requests::{CandidateInterviewRequest, ScheduleInterviewRequest};
use crate::models::users::entities::UserRole;
use crate::services::InterviewService;

static INTERVIEW_SERVICE: Lazy<InterviewService> = Lazy::new(InterviewService::new_lazy);

pub async fn add_interview(
    req: HttpRequest,
    schedule_data: web::Json<ScheduleInterviewRequest>,
) -> ActixResult<HttpResponse> {
    INTERVIEW_SERVICE
        .schedule_interview(schedule_data.into_inner(), &req)
        .await
}

pub async fn my_interviews(
    req: HttpRequest,
    id_data: web::Json<CandidateIdRequest>,
) -> ActixResult<HttpResponse> {
    INTERVIEW_SERVICE
        .list_candidate_interviews(id_data.into_inner(), &req)
        .await
}

pub async fn interview_detail(
    req: HttpRequest,
    interview_data: web::Json<CandidateInterviewRequest>,
) -> ActixResult<HttpResponse> {
    INTERVIEW_SERVICE
        .get_candidate_interview(interview_data.into_inner(), &req)
        .await
}

pub fn configure_interview_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/interviews")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(RequireSession)
            .wrap(RequireApiKey)
            .route("/add", web::post().to(add_interview)),
    )
    .service(
        web::scope("/api/candidate/interviews")
            .wrap(RequireApiKey)
            .route("/my_interviews", web::post().to(my_interviews))
            .route("/interview_detail", web::post().to(interview_detail)),
    );
}
