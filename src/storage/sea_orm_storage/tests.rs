use super::SeaOrmStorage;
use crate::errors::RecruitError;
use crate::models::{
    candidates::entities::{ApplicationStatus, NewCandidate},
    exams::entities::{AnswerKey, NewExam, NewQuestion, SubmittedAnswer},
    interviews::entities::NewInterviewSchedule,
    positions::entities::PositionInput,
    study_materials::entities::StudyMaterialInput,
    users::entities::{NewUser, UserRole},
};
use sea_orm::{ConnectOptions, Database};

async fn storage() -> SeaOrmStorage {
    // 内存库只允许单连接，否则每个连接各自一份空库
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect sqlite");
    SeaOrmStorage::from_connection(db)
        .await
        .expect("run migrations")
}

fn new_user(username: &str, role: UserRole) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: "hashed".to_string(),
        full_name: format!("{username} full"),
        email: format!("{username}@example.com"),
        role,
    }
}

fn new_candidate(user_id: i64) -> NewCandidate {
    NewCandidate {
        user_id,
        full_name: Some("Budi Santoso".to_string()),
        age: 25,
        birthdate: "1999-05-01".to_string(),
        gender: "male".to_string(),
        email: "budi@example.com".to_string(),
        phone_number: "081234567890".to_string(),
    }
}

fn question(text: &str, key: AnswerKey) -> NewQuestion {
    NewQuestion {
        question_text: text.to_string(),
        option_a: "a".to_string(),
        option_b: "b".to_string(),
        option_c: "c".to_string(),
        option_d: "d".to_string(),
        answer_key: key,
    }
}

fn answer(question_id: i64, option: &str) -> SubmittedAnswer {
    SubmittedAnswer {
        question_id,
        selected_option: option.to_string(),
    }
}

/// 管理员、候选人、职位、状态、分类与考试的最小数据集
struct Fixture {
    admin_id: i64,
    candidate_id: i64,
    position_id: i64,
    status_id: i64,
    exam_id: i64,
}

async fn fixture(storage: &SeaOrmStorage) -> Fixture {
    let admin = storage
        .create_user_impl(new_user("admin", UserRole::Admin))
        .await
        .unwrap();
    let user = storage
        .create_user_impl(new_user("budi", UserRole::Candidate))
        .await
        .unwrap();
    let candidate = storage
        .create_candidate_impl(new_candidate(user.id))
        .await
        .unwrap();
    let position = storage
        .create_position_impl(PositionInput {
            position_name: "Backend Engineer".to_string(),
            position_type: "Full-time".to_string(),
            work: "Remote".to_string(),
        })
        .await
        .unwrap();
    let status = storage
        .create_status_impl("Applied".to_string())
        .await
        .unwrap();
    let category = storage
        .create_category_impl("Technical".to_string())
        .await
        .unwrap();
    let exam = storage
        .create_exam_impl(NewExam {
            created_by: admin.id,
            category_id: category.id,
            title: "Rust basics".to_string(),
            description: "Ownership and borrowing".to_string(),
        })
        .await
        .unwrap();

    Fixture {
        admin_id: admin.id,
        candidate_id: candidate.id,
        position_id: position.id,
        status_id: status.id,
        exam_id: exam.id,
    }
}

#[tokio::test]
async fn test_create_user_rejects_duplicate_username() {
    let storage = storage().await;
    storage
        .create_user_impl(new_user("alice", UserRole::Admin))
        .await
        .unwrap();

    let err = storage
        .create_user_impl(new_user("alice", UserRole::Candidate))
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));
    assert_eq!(
        storage
            .count_users_by_role_impl(UserRole::Admin)
            .await
            .unwrap(),
        1
    );
}

#[tokio::test]
async fn test_update_user_rejects_taken_username() {
    let storage = storage().await;
    let alice = storage
        .create_user_impl(new_user("alice", UserRole::Admin))
        .await
        .unwrap();
    storage
        .create_user_impl(new_user("bob", UserRole::Admin))
        .await
        .unwrap();

    let err = storage
        .update_user_impl(
            alice.id,
            crate::models::users::entities::UserUpdate {
                username: "bob".to_string(),
                full_name: alice.full_name.clone(),
                email: alice.email.clone(),
                role: UserRole::Admin,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));
}

#[tokio::test]
async fn test_create_candidate_requires_free_user() {
    let storage = storage().await;

    let err = storage
        .create_candidate_impl(new_candidate(999))
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));

    let user = storage
        .create_user_impl(new_user("budi", UserRole::Candidate))
        .await
        .unwrap();
    storage
        .create_candidate_impl(new_candidate(user.id))
        .await
        .unwrap();
    let err = storage
        .create_candidate_impl(new_candidate(user.id))
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));
}

#[tokio::test]
async fn test_assign_position_creates_then_updates() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let change = ApplicationStatus {
        candidate_id: f.candidate_id,
        position_id: f.position_id,
        status_id: f.status_id,
    };

    let first = storage.assign_position_impl(change).await.unwrap();
    assert!(first.created);

    let second_status = storage
        .create_status_impl("Interview".to_string())
        .await
        .unwrap();
    let second = storage
        .assign_position_impl(ApplicationStatus {
            status_id: second_status.id,
            ..change
        })
        .await
        .unwrap();
    assert!(!second.created);
    assert_eq!(second.id, first.id);

    let applications = storage
        .list_candidate_applications_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(applications.len(), 1);
    assert_eq!(applications[0].status_name.as_deref(), Some("Interview"));
}

#[tokio::test]
async fn test_assign_position_unknown_status() {
    let storage = storage().await;
    let f = fixture(&storage).await;

    let err = storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: 404,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));
}

#[tokio::test]
async fn test_candidate_list_uses_placeholders_without_application() {
    let storage = storage().await;
    let f = fixture(&storage).await;

    let items = storage.list_candidates_impl().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].candidate.id, f.candidate_id);
    assert_eq!(items[0].position_name, "-");
    assert_eq!(items[0].status_name, "-");
    assert!(items[0].position_id.is_none());
}

#[tokio::test]
async fn test_add_questions_enforces_limit_atomically() {
    let storage = storage().await;
    let f = fixture(&storage).await;

    let batch: Vec<NewQuestion> = (0..3)
        .map(|i| question(&format!("Q{i}"), AnswerKey::A))
        .collect();
    let inserted = storage
        .add_questions_impl(f.exam_id, batch, 4)
        .await
        .unwrap();
    assert_eq!(inserted.len(), 3);

    // 超出上限时整批都不落库
    let batch: Vec<NewQuestion> = (0..2)
        .map(|i| question(&format!("Extra{i}"), AnswerKey::B))
        .collect();
    let err = storage
        .add_questions_impl(f.exam_id, batch, 4)
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Validation(_)));

    let detail = storage
        .get_exam_detail_impl(f.exam_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.total_questions, 3);

    storage
        .add_questions_impl(f.exam_id, vec![question("Last", AnswerKey::C)], 4)
        .await
        .unwrap();
    let err = storage
        .add_questions_impl(f.exam_id, vec![question("Over", AnswerKey::D)], 4)
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Validation(_)));
}

#[tokio::test]
async fn test_add_questions_unknown_exam() {
    let storage = storage().await;

    let err = storage
        .add_questions_impl(42, vec![question("Q", AnswerKey::A)], 50)
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_exam_removes_questions_and_reports() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let questions = storage
        .add_questions_impl(f.exam_id, vec![question("Q", AnswerKey::A)], 50)
        .await
        .unwrap();
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();

    assert!(storage.delete_exam_impl(f.exam_id).await.unwrap());
    assert!(storage.get_exam_impl(f.exam_id).await.unwrap().is_none());
    assert!(
        storage
            .get_question_impl(questions[0].id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        storage
            .list_candidate_exams_impl(f.candidate_id)
            .await
            .unwrap()
            .is_empty()
    );
    assert!(!storage.delete_exam_impl(f.exam_id).await.unwrap());
}

#[tokio::test]
async fn test_assign_exam_moves_applications_and_rejects_duplicate() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: f.status_id,
        })
        .await
        .unwrap();
    let exam_status = storage
        .create_status_impl("Exam".to_string())
        .await
        .unwrap();

    let report = storage
        .assign_exam_impl(f.exam_id, f.candidate_id, exam_status.id)
        .await
        .unwrap();
    assert!(!report.is_completed);
    assert_eq!(report.score, 0.0);

    let applications = storage
        .list_candidate_applications_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(applications[0].status_id, Some(exam_status.id));

    let err = storage
        .assign_exam_impl(f.exam_id, f.candidate_id, exam_status.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));
}

#[tokio::test]
async fn test_assign_exam_missing_status_keeps_applications() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: f.status_id,
        })
        .await
        .unwrap();

    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, 999)
        .await
        .unwrap();

    let applications = storage
        .list_candidate_applications_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(applications[0].status_id, Some(f.status_id));
}

#[tokio::test]
async fn test_submit_exam_scores_and_locks_report() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let questions = storage
        .add_questions_impl(
            f.exam_id,
            vec![
                question("Q1", AnswerKey::A),
                question("Q2", AnswerKey::B),
                question("Q3", AnswerKey::C),
                question("Q4", AnswerKey::D),
            ],
            50,
        )
        .await
        .unwrap();
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();

    let answers = vec![
        answer(questions[0].id, "A"),
        // 重复作答只算第一次
        answer(questions[0].id, "B"),
        answer(questions[1].id, "b"),
        answer(questions[2].id, "X"),
        answer(9999, "A"),
    ];
    let result = storage
        .submit_exam_impl(f.candidate_id, f.exam_id, answers)
        .await
        .unwrap();
    assert_eq!(result.total_questions, 4);
    assert_eq!(result.correct_answers, 2);
    assert_eq!(result.score, 50.0);
    assert!(result.is_completed);

    let err = storage
        .submit_exam_impl(f.candidate_id, f.exam_id, vec![answer(questions[0].id, "A")])
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));

    let summary = storage.exam_summary_impl(f.candidate_id).await.unwrap();
    assert_eq!(summary.total_exams, 1);
    assert_eq!(summary.average_score, Some(50.0));
}

#[tokio::test]
async fn test_submit_exam_requires_assignment_and_questions() {
    let storage = storage().await;
    let f = fixture(&storage).await;

    let err = storage
        .submit_exam_impl(f.candidate_id, f.exam_id, vec![])
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));

    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();
    let err = storage
        .submit_exam_impl(f.candidate_id, f.exam_id, vec![answer(1, "A")])
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::Validation(_)));

    let reports = storage
        .list_candidate_exam_reports_impl(f.candidate_id, Some(f.exam_id))
        .await
        .unwrap();
    assert_eq!(reports.len(), 1);
    assert!(!reports[0].report.is_completed);
}

#[tokio::test]
async fn test_exam_summary_without_completed_exams() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();

    let summary = storage.exam_summary_impl(f.candidate_id).await.unwrap();
    assert_eq!(summary.total_exams, 0);
    assert!(summary.average_score.is_none());
}

#[tokio::test]
async fn test_candidate_exam_hides_answer_keys_for_unassigned() {
    let storage = storage().await;
    let f = fixture(&storage).await;

    let err = storage
        .get_candidate_exam_impl(f.candidate_id, f.exam_id)
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));

    storage
        .add_questions_impl(f.exam_id, vec![question("Q", AnswerKey::A)], 50)
        .await
        .unwrap();
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();
    let detail = storage
        .get_candidate_exam_impl(f.candidate_id, f.exam_id)
        .await
        .unwrap();
    assert_eq!(detail.total_questions, 1);
    assert!(!detail.is_completed);
}

#[tokio::test]
async fn test_assign_study_materials_creates_then_refreshes() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let input = |title: &str| StudyMaterialInput {
        title: title.to_string(),
        description: "read me".to_string(),
        file_url: "https://files.example.com/doc.pdf".to_string(),
        thumbnail: None,
    };
    let first = storage
        .create_study_material_impl(f.admin_id, input("Guide"))
        .await
        .unwrap();
    let second = storage
        .create_study_material_impl(f.admin_id, input("Handbook"))
        .await
        .unwrap();

    let result = storage
        .assign_study_materials_impl(f.candidate_id, vec![first.id])
        .await
        .unwrap();
    assert_eq!(result.created_study_ids, vec![first.id]);
    assert!(result.updated_study_ids.is_empty());

    let result = storage
        .assign_study_materials_impl(f.candidate_id, vec![first.id, second.id])
        .await
        .unwrap();
    assert_eq!(result.created_study_ids, vec![second.id]);
    assert_eq!(result.updated_study_ids, vec![first.id]);

    let materials = storage
        .list_candidate_study_materials_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(materials.len(), 2);

    let detail = storage
        .get_study_material_detail_impl(first.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.material.assigned_count, 1);
    assert_eq!(detail.assigned_candidates[0].username.as_deref(), Some("budi"));
}

#[tokio::test]
async fn test_assign_study_materials_unknown_id_is_atomic() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let material = storage
        .create_study_material_impl(
            f.admin_id,
            StudyMaterialInput {
                title: "Guide".to_string(),
                description: String::new(),
                file_url: "https://files.example.com/guide.pdf".to_string(),
                thumbnail: None,
            },
        )
        .await
        .unwrap();

    let err = storage
        .assign_study_materials_impl(f.candidate_id, vec![material.id, 777])
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));
    assert!(err.message().contains("777"));
    assert!(
        storage
            .list_candidate_study_materials_impl(f.candidate_id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn test_schedule_interview_upserts_per_application() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let application = storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: f.status_id,
        })
        .await
        .unwrap();
    let schedule = |date: &str| NewInterviewSchedule {
        candidate_id: f.candidate_id,
        candidate_position_id: application.id,
        interview_date: date.to_string(),
        interview_time: "10:00".to_string(),
        notes: String::new(),
        meeting_link: Some("https://meet.example.com/abc".to_string()),
        admin_ids: vec![f.admin_id],
    };

    let (_, first) = storage
        .schedule_interview_impl(schedule("2025-03-01"))
        .await
        .unwrap();
    assert!(!first.updated);

    let (saved, second) = storage
        .schedule_interview_impl(schedule("2025-03-05"))
        .await
        .unwrap();
    assert!(second.updated);
    assert_eq!(second.schedule_id, first.schedule_id);
    assert_eq!(saved.interview_date, "2025-03-05");

    let interviews = storage
        .list_candidate_interviews_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(interviews.len(), 1);
    assert_eq!(interviews[0].position_name.as_deref(), Some("Backend Engineer"));
    assert_eq!(interviews[0].admins.len(), 1);
    assert_eq!(interviews[0].admins[0].username, "admin");
}

#[tokio::test]
async fn test_schedule_interview_requires_own_application() {
    let storage = storage().await;
    let f = fixture(&storage).await;

    let err = storage
        .schedule_interview_impl(NewInterviewSchedule {
            candidate_id: f.candidate_id,
            candidate_position_id: 123,
            interview_date: "2025-03-01".to_string(),
            interview_time: "10:00".to_string(),
            notes: String::new(),
            meeting_link: None,
            admin_ids: vec![],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, RecruitError::NotFound(_)));
}

#[tokio::test]
async fn test_candidate_detail_aggregates_sections() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: f.status_id,
        })
        .await
        .unwrap();
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();

    let detail = storage
        .get_candidate_detail_impl(f.candidate_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.exam_reports.len(), 1);
    assert_eq!(detail.exam_reports[0].exam_title, "Rust basics");
    assert!(detail.interviews.is_empty());
    assert!(detail.summary_report.average_score.is_none());

    assert!(storage.get_candidate_detail_impl(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_status_clears_application_status() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: f.status_id,
        })
        .await
        .unwrap();

    assert!(storage.delete_status_impl(f.status_id).await.unwrap());
    let applications = storage
        .list_candidate_applications_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(applications.len(), 1);
    assert!(applications[0].status_id.is_none());
}

#[tokio::test]
async fn test_delete_exam_author_keeps_candidate_results() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let questions = storage
        .add_questions_impl(f.exam_id, vec![question("Q", AnswerKey::B)], 50)
        .await
        .unwrap();
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();
    storage
        .submit_exam_impl(f.candidate_id, f.exam_id, vec![answer(questions[0].id, "B")])
        .await
        .unwrap();

    let err = storage.delete_user_impl(f.admin_id).await.unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));

    assert!(storage.get_exam_impl(f.exam_id).await.unwrap().is_some());
    let summary = storage.exam_summary_impl(f.candidate_id).await.unwrap();
    assert_eq!(summary.total_exams, 1);
    assert_eq!(summary.average_score, Some(100.0));
}

#[tokio::test]
async fn test_delete_study_material_author_is_rejected() {
    let storage = storage().await;
    let author = storage
        .create_user_impl(new_user("librarian", UserRole::Admin))
        .await
        .unwrap();
    storage
        .create_study_material_impl(
            author.id,
            StudyMaterialInput {
                title: "Guide".to_string(),
                description: "read me".to_string(),
                file_url: "https://files.example.com/doc.pdf".to_string(),
                thumbnail: None,
            },
        )
        .await
        .unwrap();

    let err = storage.delete_user_impl(author.id).await.unwrap_err();
    assert!(matches!(err, RecruitError::Conflict(_)));
    assert!(storage.get_user_by_id_impl(author.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_deleted_interviewer_leaves_schedule() {
    let storage = storage().await;
    let f = fixture(&storage).await;
    let interviewer = storage
        .create_user_impl(new_user("interviewer", UserRole::Admin))
        .await
        .unwrap();
    let application = storage
        .assign_position_impl(ApplicationStatus {
            candidate_id: f.candidate_id,
            position_id: f.position_id,
            status_id: f.status_id,
        })
        .await
        .unwrap();
    storage
        .schedule_interview_impl(NewInterviewSchedule {
            candidate_id: f.candidate_id,
            candidate_position_id: application.id,
            interview_date: "2025-03-01".to_string(),
            interview_time: "10:00".to_string(),
            notes: String::new(),
            meeting_link: None,
            admin_ids: vec![f.admin_id, interviewer.id],
        })
        .await
        .unwrap();

    assert!(storage.delete_user_impl(interviewer.id).await.unwrap());

    let interviews = storage
        .list_candidate_interviews_impl(f.candidate_id)
        .await
        .unwrap();
    assert_eq!(interviews.len(), 1);
    assert_eq!(interviews[0].schedule.admin_ids, vec![f.admin_id]);
    assert_eq!(interviews[0].admins.len(), 1);
    assert_eq!(interviews[0].admins[0].username, "admin");
}

#[tokio::test]
async fn test_submit_skips_question_with_unreadable_key() {
    use crate::entity::prelude::QuestionActiveModel;
    use sea_orm::{ActiveModelTrait, Set};

    let storage = storage().await;
    let f = fixture(&storage).await;
    let questions = storage
        .add_questions_impl(f.exam_id, vec![question("Clean", AnswerKey::C)], 50)
        .await
        .unwrap();
    let dirty = QuestionActiveModel {
        exam_id: Set(f.exam_id),
        question_text: Set("Dirty".to_string()),
        option_a: Set("a".to_string()),
        option_b: Set("b".to_string()),
        option_c: Set("c".to_string()),
        option_d: Set("d".to_string()),
        answer_key: Set("Z".to_string()),
        created_at: Set(0),
        updated_at: Set(0),
        ..Default::default()
    }
    .insert(&storage.db)
    .await
    .unwrap();
    storage
        .assign_exam_impl(f.exam_id, f.candidate_id, f.status_id)
        .await
        .unwrap();

    let result = storage
        .submit_exam_impl(
            f.candidate_id,
            f.exam_id,
            vec![answer(questions[0].id, "C"), answer(dirty.id, "A")],
        )
        .await
        .unwrap();
    assert_eq!(result.total_questions, 1);
    assert_eq!(result.correct_answers, 1);
    assert_eq!(result.score, 100.0);
}
