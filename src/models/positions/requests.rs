use serde::Deserialize;

use super::entities::PositionInput;
use crate::models::common::{FieldError, fields, require};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PositionRequest {
    #[serde(alias = "id_position", deserialize_with = "fields::positive_int")]
    pub position_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub position_name: Option<String>,
    #[serde(rename = "type", alias = "position_type", deserialize_with = "fields::text")]
    pub position_type: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub work: Option<String>,
}

impl PositionRequest {
    pub fn into_input(self) -> Result<PositionInput, FieldError> {
        Ok(PositionInput {
            position_name: require(self.position_name, "position_name")?,
            position_type: require(self.position_type, "type")?,
            work: require(self.work, "work")?,
        })
    }

    pub fn into_update(self) -> Result<(i64, PositionInput), FieldError> {
        let id = require(self.position_id, "position_id")?;
        Ok((id, self.into_input()?))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PositionIdRequest {
    #[serde(alias = "id_position", deserialize_with = "fields::positive_int")]
    pub position_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_field_and_alias() {
        let req: PositionRequest = serde_json::from_value(json!({
            "id_position": 4,
            "position_name": "Backend Engineer",
            "type": "full-time",
            "work": "remote"
        }))
        .expect("deserialize");
        let (id, input) = req.into_update().expect("valid");
        assert_eq!(id, 4);
        assert_eq!(input.position_type, "full-time");
    }

    #[test]
    fn test_missing_type_is_rejected() {
        let req: PositionRequest =
            serde_json::from_value(json!({"position_name": "QA", "work": "onsite"}))
                .expect("deserialize");
        assert!(req.into_input().unwrap_err().message.contains("type"));
    }
}
