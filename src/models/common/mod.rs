pub mod error_code;
pub mod fields;
pub mod request;
pub mod response;

pub use error_code::ErrorCode;
pub use request::{FieldError, check, require};
pub use response::{ApiResponse, ResponseStatus};
