use chrono::{DateTime, Utc};
use serde::Serialize;

// 职位实体
#[derive(Debug, Clone, Serialize)]
pub struct Position {
    #[serde(rename = "id_position")]
    pub id: i64,
    pub position_name: String,
    #[serde(rename = "type")]
    pub position_type: String,
    pub work: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PositionInput {
    pub position_name: String,
    pub position_type: String,
    pub work: String,
}
