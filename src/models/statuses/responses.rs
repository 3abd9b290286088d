use serde::Serialize;

use super::entities::Status;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status_data: Status,
}

#[derive(Debug, Serialize)]
pub struct StatusListResponse {
    pub statuses: Vec<Status>,
    pub total: usize,
}
