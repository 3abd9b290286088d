use serde::Serialize;

use super::entities::{
    AssignedExam, CandidateExamDetail, CandidateExamReport, Category, Exam, ExamDetail,
    ExamListItem, ExamReport, ExamResult, Question,
};

#[derive(Debug, Serialize)]
pub struct ExamResponse {
    pub exam: Exam,
}

#[derive(Debug, Serialize)]
pub struct ExamListResponse {
    pub exams: Vec<ExamListItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ExamDetailResponse {
    pub exam: ExamDetail,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub question: Question,
}

#[derive(Debug, Serialize)]
pub struct QuestionsCreatedResponse {
    pub exam_id: i64,
    pub questions: Vec<Question>,
    pub inserted: usize,
}

#[derive(Debug, Serialize)]
pub struct ExamAssignedResponse {
    pub report: ExamReport,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: Vec<Category>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CandidateExamListResponse {
    pub candidate_id: i64,
    pub candidate_name: Option<String>,
    pub total_exams: usize,
    pub exams: Vec<AssignedExam>,
}

#[derive(Debug, Serialize)]
pub struct CandidateExamDetailResponse {
    pub candidate_id: i64,
    pub candidate_name: Option<String>,
    #[serde(flatten)]
    pub detail: CandidateExamDetail,
}

#[derive(Debug, Serialize)]
pub struct ExamResultResponse {
    pub result: ExamResult,
}

#[derive(Debug, Serialize)]
pub struct CandidateExamReportsResponse {
    pub candidate_id: i64,
    pub candidate_name: Option<String>,
    pub total_reports: usize,
    pub average_score: Option<f64>,
    pub total_exams_taken: u64,
    pub reports: Vec<CandidateExamReport>,
}
