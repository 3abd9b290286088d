use serde::Serialize;

use super::entities::{
    AssignedStudyMaterial, StudyAssignmentResult, StudyMaterial, StudyMaterialDetail,
    StudyMaterialListItem,
};

#[derive(Debug, Serialize)]
pub struct StudyMaterialResponse {
    pub material: StudyMaterial,
}

#[derive(Debug, Serialize)]
pub struct StudyMaterialListResponse {
    pub materials: Vec<StudyMaterialListItem>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StudyMaterialDetailResponse {
    pub material: StudyMaterialDetail,
}

#[derive(Debug, Serialize)]
pub struct StudyAssignmentResponse {
    #[serde(flatten)]
    pub result: StudyAssignmentResult,
}

#[derive(Debug, Serialize)]
pub struct CandidateStudyListResponse {
    pub candidate_id: i64,
    pub total: usize,
    pub study_materials: Vec<AssignedStudyMaterial>,
}

#[derive(Debug, Serialize)]
pub struct CandidateStudyDetailResponse {
    pub study_material: AssignedStudyMaterial,
}
