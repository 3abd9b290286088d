use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseHealth {
    Connected,
    Error,
}

#[derive(Debug, Serialize)]
pub struct AppStatusResponse {
    pub project: &'static str,
    pub uptime: i64,
    pub version: String,
    pub database: DatabaseHealth,
}
