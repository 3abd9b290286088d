use serde::Serialize;

use super::entities::{Candidate, CandidateApplication, CandidateDetail, CandidateListItem};
use crate::models::positions::entities::Position;

#[derive(Debug, Serialize)]
pub struct CandidateResponse {
    pub candidate: Candidate,
}

#[derive(Debug, Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<CandidateListItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CandidateDetailResponse {
    pub candidate: CandidateDetail,
}

#[derive(Debug, Serialize)]
pub struct CandidateApplicationsResponse {
    pub candidate_id: i64,
    pub applications: Vec<CandidateApplication>,
}

#[derive(Debug, Serialize)]
pub struct CandidatePositionsResponse {
    pub candidate_id: i64,
    pub positions: Vec<Position>,
}

#[derive(Debug, Serialize)]
pub struct AssignPositionResponse {
    pub application_id: i64,
    pub created: bool,
    pub updated: bool,
}
