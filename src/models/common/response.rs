use serde::Serialize;

use crate::models::ErrorCode;

/// 信封状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

// 统一的API响应结构：负载字段平铺在信封顶层
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub code: i32,
    pub message: String,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn error(code: ErrorCode, data: T, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            code: code as i32,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Success,
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Failed,
            code: code as i32,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        token: String,
        role: String,
    }

    #[test]
    fn test_success_flattens_payload() {
        let body = serde_json::to_value(ApiResponse::success(
            Payload {
                token: "t".to_string(),
                role: "admin".to_string(),
            },
            "Login successful",
        ))
        .expect("serializable");

        assert_eq!(
            body,
            json!({
                "status": "SUCCESS",
                "code": 0,
                "message": "Login successful",
                "token": "t",
                "role": "admin",
            })
        );
    }

    #[test]
    fn test_error_empty_has_no_payload() {
        let body = serde_json::to_value(ApiResponse::error_empty(
            ErrorCode::ExamNotFound,
            "Exam not found",
        ))
        .expect("serializable");

        assert_eq!(body["status"], "FAILED");
        assert_eq!(body["code"], ErrorCode::ExamNotFound as i32);
        assert_eq!(body.as_object().map(|o| o.len()), Some(3));
    }
}
