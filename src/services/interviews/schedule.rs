use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;
use tracing::info;

use super::InterviewService;
use crate::models::{
    ApiResponse, ErrorCode,
    interviews::{requests::ScheduleInterviewRequest, responses::ScheduleInterviewResponse},
};
use crate::services::{field_error_response, not_found_response, storage_error_response};
use crate::storage::Storage;

fn admin_rejected(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::error_empty(
        ErrorCode::InterviewAdminInvalid,
        message,
    ))
}

/// 面试官必须存在且是管理员；ID 已去重
async fn check_interview_admins(
    storage: &Arc<dyn Storage>,
    admin_ids: &[i64],
    max_admins: usize,
) -> Result<(), HttpResponse> {
    if admin_ids.len() > max_admins {
        return Err(admin_rejected(format!(
            "At most {max_admins} admins can be assigned to an interview"
        )));
    }

    for &admin_id in admin_ids {
        match storage.get_user_by_id(admin_id).await {
            Ok(Some(user)) if user.role.is_admin() => {}
            Ok(Some(user)) => {
                return Err(admin_rejected(format!(
                    "User {} is not an admin",
                    user.id
                )));
            }
            Ok(None) => {
                return Err(not_found_response(
                    ErrorCode::UserNotFound,
                    &format!("Admin {admin_id} not found"),
                ));
            }
            Err(e) => return Err(storage_error_response(e, "Admin lookup failed")),
        }
    }
    Ok(())
}

pub async fn schedule_interview(
    service: &InterviewService,
    schedule_request: ScheduleInterviewRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let schedule = match schedule_request.into_new_schedule() {
        Ok(schedule) => schedule,
        Err(e) => return Ok(field_error_response(e)),
    };

    let storage = service.get_storage(request)?;
    let max_admins = service.get_config().recruitment.max_interview_admins;
    if let Err(response) = check_interview_admins(&storage, &schedule.admin_ids, max_admins).await
    {
        return Ok(response);
    }

    // 候选人或应聘记录不存在时存储层返回 NotFound
    match storage.schedule_interview(schedule).await {
        Ok((schedule, outcome)) => {
            info!(
                "Interview schedule {} {} for candidate {}",
                outcome.schedule_id,
                if outcome.updated { "updated" } else { "created" },
                schedule.candidate_id
            );
            let message = if outcome.updated {
                "Interview schedule updated successfully"
            } else {
                "Interview scheduled successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ScheduleInterviewResponse {
                    schedule_id: outcome.schedule_id,
                    updated: outcome.updated,
                    schedule,
                },
                message,
            )))
        }
        Err(e) => Ok(storage_error_response(e, "Interview scheduling failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        candidates::entities::{ApplicationStatus, NewCandidate},
        positions::entities::PositionInput,
        users::entities::{NewUser, UserRole},
    };
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use actix_web::{http::StatusCode, test, web};
    use sea_orm::{ConnectOptions, Database};
    use serde_json::{Value, json};

    async fn storage() -> Arc<dyn Storage> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("connect sqlite");
        Arc::new(
            SeaOrmStorage::from_connection(db)
                .await
                .expect("run migrations"),
        )
    }

    async fn user(storage: &Arc<dyn Storage>, username: &str, role: UserRole) -> i64 {
        storage
            .create_user(NewUser {
                username: username.to_string(),
                password: "hashed".to_string(),
                full_name: format!("{username} full"),
                email: format!("{username}@example.com"),
                role,
            })
            .await
            .expect("create user")
            .id
    }

    /// 返回 (candidate_id, application_id)
    async fn application(storage: &Arc<dyn Storage>) -> (i64, i64) {
        let user_id = user(storage, "sari", UserRole::Candidate).await;
        let candidate = storage
            .create_candidate(NewCandidate {
                user_id,
                full_name: Some("Sari".to_string()),
                age: 27,
                birthdate: "1997-02-03".to_string(),
                gender: "female".to_string(),
                email: "sari@example.com".to_string(),
                phone_number: "081298765432".to_string(),
            })
            .await
            .expect("create candidate");
        let position = storage
            .create_position(PositionInput {
                position_name: "Data Analyst".to_string(),
                position_type: "full-time".to_string(),
                work: "hybrid".to_string(),
            })
            .await
            .expect("create position");
        let status = storage
            .create_status("Interview".to_string())
            .await
            .expect("create status");
        let outcome = storage
            .assign_position(ApplicationStatus {
                candidate_id: candidate.id,
                position_id: position.id,
                status_id: status.id,
            })
            .await
            .expect("assign position");
        (candidate.id, outcome.id)
    }

    async fn schedule(storage: &Arc<dyn Storage>, body: Value) -> (StatusCode, Value) {
        let request = test::TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();
        let schedule_request: ScheduleInterviewRequest =
            serde_json::from_value(body).expect("deserialize");
        let resp = InterviewService::new_lazy()
            .schedule_interview(schedule_request, &request)
            .await
            .expect("handler");
        let status = resp.status();
        let body = actix_web::body::to_bytes(resp.into_body())
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[actix_web::test]
    async fn test_schedule_then_reschedule_same_application() {
        let storage = storage().await;
        let (candidate_id, application_id) = application(&storage).await;
        let admin = user(&storage, "lead", UserRole::Admin).await;

        let body = json!({
            "candidate_id": candidate_id,
            "candidate_position_id": application_id,
            "interview_date": "2025-03-10",
            "interview_time": "09:30",
            "admin_ids": [admin, admin]
        });
        let (status, first) = schedule(&storage, body.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first["updated"], false);

        let (status, second) = schedule(&storage, body).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(second["updated"], true);
        assert_eq!(second["schedule_id"], first["schedule_id"]);
    }

    #[actix_web::test]
    async fn test_admin_checks() {
        let storage = storage().await;
        let (candidate_id, application_id) = application(&storage).await;
        let candidate_user = user(&storage, "not_admin", UserRole::Candidate).await;
        let mut admins = Vec::new();
        for name in ["a1", "a2", "a3", "a4"] {
            admins.push(user(&storage, name, UserRole::Admin).await);
        }

        let body = |ids: Vec<i64>| {
            json!({
                "candidate_id": candidate_id,
                "candidate_position_id": application_id,
                "interview_date": "2025-03-10",
                "interview_time": "14:00:00",
                "admin_ids": ids
            })
        };

        let (status, _) = schedule(&storage, body(admins.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = schedule(&storage, body(vec![admins[0], candidate_user])).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = schedule(&storage, body(vec![admins[0], 9_999])).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = schedule(&storage, body(admins[..3].to_vec())).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unknown_application_is_not_found() {
        let storage = storage().await;
        let (candidate_id, _) = application(&storage).await;

        let (status, body) = schedule(
            &storage,
            json!({
                "candidate_id": candidate_id,
                "candidate_position_id": 4_242,
                "interview_date": "2025-03-10",
                "interview_time": "10:00"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["status"], "FAILED");
    }
}
