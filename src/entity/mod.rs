//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

use chrono::{DateTime, Utc};

pub mod prelude;

pub mod candidate_positions;
pub mod candidates;
pub mod categories;
pub mod exam_reports;
pub mod exams;
pub mod interview_schedules;
pub mod positions;
pub mod questions;
pub mod status;
pub mod study_materials;
pub mod study_materials_candidates;
pub mod users;

/// 数据库中的 unix 秒转换为 UTC 时间
pub(crate) fn to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
