use serde::Deserialize;

use crate::models::common::{FieldError, fields, require};

// 登录请求（管理端与候选人端共用）
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    #[serde(deserialize_with = "fields::text")]
    pub username: Option<String>,
    // 密码不做 trim
    pub password: Option<String>,
}

impl LoginRequest {
    pub fn into_credentials(self) -> Result<(String, String), FieldError> {
        let username = require(self.username, "username")?;
        let password = require(self.password.filter(|p| !p.is_empty()), "password")?;
        Ok((username, password))
    }
}

/// 请求体中携带的会话令牌
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TokenRequest {
    #[serde(deserialize_with = "fields::text")]
    pub token: Option<String>,
}

// 管理员查询其他用户资料
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileLookupRequest {
    #[serde(deserialize_with = "fields::text")]
    pub token: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_login_requires_both_fields() {
        let req: LoginRequest =
            serde_json::from_value(json!({"username": "admin"})).expect("deserialize");
        assert!(req.into_credentials().unwrap_err().message.contains("password"));

        let req: LoginRequest =
            serde_json::from_value(json!({"username": " ", "password": "x"})).expect("json");
        assert!(req.into_credentials().unwrap_err().message.contains("username"));
    }

    #[test]
    fn test_password_keeps_whitespace() {
        let req: LoginRequest =
            serde_json::from_value(json!({"username": "admin", "password": " pw "}))
                .expect("deserialize");
        assert_eq!(req.into_credentials().expect("valid").1, " pw ");
    }
}
