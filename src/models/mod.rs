//! 请求、响应与业务实体
//!
//! 每个资源一个子模块：`entities` 是业务实体，`requests` 是请求体（字段全部可选，
//! 由 `into_*` 方法统一校验），`responses` 是平铺进信封的响应负载。

pub mod auth;
pub mod candidates;
pub mod common;
pub mod exams;
pub mod interviews;
pub mod positions;
pub mod statuses;
pub mod study_materials;
pub mod system;
pub mod users;

pub use common::{ApiResponse, ErrorCode, FieldError, ResponseStatus};
pub use system::AppStartTime;
