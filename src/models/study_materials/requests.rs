use serde::Deserialize;

use super::entities::StudyMaterialInput;
use crate::models::common::{FieldError, fields, require};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudyMaterialRequest {
    #[serde(alias = "id", deserialize_with = "fields::positive_int")]
    pub material_id: Option<i64>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub created_by: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub file_url: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub thumbnail: Option<String>,
}

impl StudyMaterialRequest {
    fn input(
        title: Option<String>,
        description: Option<String>,
        file_url: Option<String>,
        thumbnail: Option<String>,
    ) -> Result<StudyMaterialInput, FieldError> {
        Ok(StudyMaterialInput {
            title: require(title, "title")?,
            description: require(description, "description")?,
            file_url: require(file_url, "file_url")?,
            thumbnail,
        })
    }

    pub fn into_create(self) -> Result<(i64, StudyMaterialInput), FieldError> {
        let created_by = require(self.created_by, "created_by")?;
        let input = Self::input(self.title, self.description, self.file_url, self.thumbnail)?;
        Ok((created_by, input))
    }

    pub fn into_update(self) -> Result<(i64, StudyMaterialInput), FieldError> {
        let material_id = require(self.material_id, "material_id")?;
        let input = Self::input(self.title, self.description, self.file_url, self.thumbnail)?;
        Ok((material_id, input))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StudyMaterialIdRequest {
    #[serde(alias = "id", deserialize_with = "fields::positive_int")]
    pub material_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AssignStudyRequest {
    #[serde(alias = "study_id", deserialize_with = "fields::id_list")]
    pub study_ids: Option<Vec<i64>>,
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
}

impl AssignStudyRequest {
    /// 去重后保持原顺序
    pub fn into_parts(self) -> Result<(Vec<i64>, i64), FieldError> {
        let candidate_id = require(self.candidate_id, "candidate_id")?;
        let mut study_ids = require(self.study_ids, "study_ids")?;
        let mut seen = std::collections::HashSet::new();
        study_ids.retain(|id| seen.insert(*id));
        Ok((study_ids, candidate_id))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CandidateStudyRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub candidate_id: Option<i64>,
    #[serde(alias = "material_id", deserialize_with = "fields::positive_int")]
    pub study_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_thumbnail_is_optional() {
        let req: StudyMaterialRequest = serde_json::from_value(json!({
            "created_by": 1,
            "title": "Rust basics",
            "description": "Ownership and borrowing",
            "file_url": "https://example.com/rust.pdf"
        }))
        .expect("deserialize");
        let (created_by, input) = req.into_create().expect("valid");
        assert_eq!(created_by, 1);
        assert!(input.thumbnail.is_none());
    }

    #[test]
    fn test_assign_accepts_single_id_and_dedupes() {
        let req: AssignStudyRequest =
            serde_json::from_value(json!({"study_ids": 4, "candidate_id": 2})).expect("json");
        assert_eq!(req.into_parts().expect("valid"), (vec![4], 2));

        let req: AssignStudyRequest =
            serde_json::from_value(json!({"study_ids": [3, 1, 3], "candidate_id": 2}))
                .expect("json");
        assert_eq!(req.into_parts().expect("valid"), (vec![3, 1], 2));
    }
}
