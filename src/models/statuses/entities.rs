use chrono::{DateTime, Utc};
use serde::Serialize;

// 招聘流程状态
#[derive(Debug, Clone, Serialize)]
pub struct Status {
    #[serde(rename = "id_status")]
    pub id: i64,
    pub status_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
