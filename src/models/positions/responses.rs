use serde::Serialize;

use super::entities::Position;

#[derive(Debug, Serialize)]
pub struct PositionResponse {
    pub position: Position,
}

#[derive(Debug, Serialize)]
pub struct PositionListResponse {
    pub positions: Vec<Position>,
    pub total: usize,
}
