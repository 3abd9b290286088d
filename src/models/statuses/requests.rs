use serde::Deserialize;

use crate::models::common::{FieldError, fields, require};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusRequest {
    #[serde(alias = "id_status", deserialize_with = "fields::positive_int")]
    pub status_id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub status_name: Option<String>,
}

impl StatusRequest {
    pub fn into_name(self) -> Result<String, FieldError> {
        require(self.status_name, "status_name")
    }

    pub fn into_update(self) -> Result<(i64, String), FieldError> {
        let id = require(self.status_id, "status_id")?;
        Ok((id, require(self.status_name, "status_name")?))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StatusIdRequest {
    #[serde(alias = "id_status", deserialize_with = "fields::positive_int")]
    pub status_id: Option<i64>,
}
