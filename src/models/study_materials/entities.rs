use chrono::{DateTime, Utc};
use serde::Serialize;

// 学习资料实体
#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterial {
    #[serde(rename = "material_id")]
    pub id: i64,
    pub created_by: i64,
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新增与修改共用的字段
#[derive(Debug, Clone)]
pub struct StudyMaterialInput {
    pub title: String,
    pub description: String,
    pub file_url: String,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterialListItem {
    #[serde(flatten)]
    pub material: StudyMaterial,
    pub created_by_name: Option<String>,
    pub assigned_count: u64,
}

/// 已分配该资料的候选人
#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterialAssignee {
    pub candidate_id: i64,
    pub full_name: Option<String>,
    pub email: String,
    pub username: Option<String>,
    pub access_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudyMaterialDetail {
    #[serde(flatten)]
    pub material: StudyMaterialListItem,
    pub assigned_candidates: Vec<StudyMaterialAssignee>,
}

/// 候选人视角的学习资料，带分配时间
#[derive(Debug, Clone, Serialize)]
pub struct AssignedStudyMaterial {
    #[serde(flatten)]
    pub material: StudyMaterial,
    pub created_by_name: Option<String>,
    pub access_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct StudyAssignmentResult {
    pub candidate_id: i64,
    pub created_study_ids: Vec<i64>,
    pub updated_study_ids: Vec<i64>,
}
