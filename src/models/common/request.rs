//! 请求体校验的公共部分

use super::ErrorCode;

/// 请求字段校验失败，服务层据此返回 400
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub code: ErrorCode,
    pub message: String,
}

impl FieldError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn missing(field: &str) -> Self {
        Self::new(ErrorCode::BadRequest, format!("Field '{field}' is required"))
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// 取出必填字段
pub fn require<T>(value: Option<T>, field: &str) -> Result<T, FieldError> {
    value.ok_or_else(|| FieldError::missing(field))
}

/// 校验函数返回 `Err(msg)` 时转成带错误码的 FieldError
pub fn check(result: Result<(), &'static str>, code: ErrorCode) -> Result<(), FieldError> {
    result.map_err(|msg| FieldError::new(code, msg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_reports_field_name() {
        assert_eq!(require(Some(3), "id"), Ok(3));
        let err = require::<i64>(None, "candidate_id").unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert!(err.message.contains("candidate_id"));
    }
}
