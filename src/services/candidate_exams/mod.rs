pub mod detail;
pub mod list;
pub mod report;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    candidates::requests::CandidateIdRequest,
    exams::requests::{CandidateExamRequest, ExamReportRequest, SubmitExamRequest},
};
use crate::storage::Storage;

/// 候选人端考试：列表、作答与成绩
pub struct CandidateExamService {
    storage: Option<Arc<dyn Storage>>,
}

impl CandidateExamService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    pub async fn list_exams(
        &self,
        id_request: CandidateIdRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_exams(self, id_request, request).await
    }

    pub async fn get_exam_detail(
        &self,
        exam_request: CandidateExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_exam_detail(self, exam_request, request).await
    }

    pub async fn submit_exam(
        &self,
        submit_request: SubmitExamRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_exam(self, submit_request, request).await
    }

    pub async fn exam_report(
        &self,
        report_request: ExamReportRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::exam_report(self, report_request, request).await
    }
}
