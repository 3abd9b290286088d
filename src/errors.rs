//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_recruit_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum RecruitError {
            $($variant(String),)*
        }

        impl RecruitError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(RecruitError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(RecruitError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(RecruitError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl RecruitError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        RecruitError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_recruit_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Io("E006", "IO Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Resource Conflict"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    PasswordHash("E014", "Password Hash Error"),
    TokenIssue("E015", "Token Issue Error"),
}

impl RecruitError {
    /// 映射为 HTTP 状态码
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            RecruitError::Validation(_) | RecruitError::DateParse(_) => StatusCode::BAD_REQUEST,
            RecruitError::NotFound(_) => StatusCode::NOT_FOUND,
            RecruitError::Conflict(_) => StatusCode::CONFLICT,
            RecruitError::Authentication(_) => StatusCode::UNAUTHORIZED,
            RecruitError::Authorization(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 是否为业务规则拒绝（而非内部故障）
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for RecruitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for RecruitError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for RecruitError {
    fn from(err: sea_orm::DbErr) -> Self {
        RecruitError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for RecruitError {
    fn from(err: std::io::Error) -> Self {
        RecruitError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for RecruitError {
    fn from(err: serde_json::Error) -> Self {
        RecruitError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for RecruitError {
    fn from(err: chrono::ParseError) -> Self {
        RecruitError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RecruitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(RecruitError::cache_connection("test").code(), "E001");
        assert_eq!(RecruitError::database_config("test").code(), "E003");
        assert_eq!(RecruitError::validation("test").code(), "E007");
        assert_eq!(RecruitError::authentication("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            RecruitError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            RecruitError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = RecruitError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_domain_error_codes() {
        assert_eq!(RecruitError::not_found("exam").code(), "E008");
        assert_eq!(RecruitError::conflict("exam").code(), "E010");
        assert_eq!(
            RecruitError::token_issue("sign").error_type(),
            "Token Issue Error"
        );
    }

    #[test]
    fn test_status_code_mapping() {
        use actix_web::http::StatusCode;
        assert_eq!(
            RecruitError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            RecruitError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RecruitError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            RecruitError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!RecruitError::database_operation("x").is_client_error());
    }

    #[test]
    fn test_db_error_conversion() {
        let err: RecruitError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }

    #[test]
    fn test_format_simple() {
        let err = RecruitError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
