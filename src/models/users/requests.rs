use serde::Deserialize;

use super::entities::{NewUser, UserRole, UserUpdate};
use crate::models::common::{ErrorCode, FieldError, check, fields, require};
use crate::utils::validate::{validate_email, validate_username};

fn parse_role(role: &str) -> Result<UserRole, FieldError> {
    role.parse::<UserRole>()
        .map_err(|msg| FieldError::new(ErrorCode::UserRoleInvalid, msg))
}

// 用户创建请求（admin/register 与 data_admin/add 共用）
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "fields::text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub password: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub role: Option<String>,
}

impl CreateUserRequest {
    /// 校验后转为存储层结构，密码仍是明文，由服务层哈希
    pub fn into_new_user(self) -> Result<NewUser, FieldError> {
        let username = require(self.username, "username")?;
        let password = require(self.password, "password")?;
        let full_name = require(self.full_name, "full_name")?;
        let email = require(self.email, "email")?;
        let role = parse_role(&require(self.role, "role")?)?;

        check(validate_username(&username), ErrorCode::UserNameInvalid)?;
        check(validate_email(&email), ErrorCode::UserEmailInvalid)?;

        Ok(NewUser {
            username,
            password,
            full_name,
            email,
            role,
        })
    }
}

// 用户更新请求
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub id: Option<i64>,
    #[serde(deserialize_with = "fields::text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "fields::text")]
    pub role: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_update(self) -> Result<(i64, UserUpdate), FieldError> {
        let id = require(self.id, "id")?;
        let username = require(self.username, "username")?;
        let full_name = require(self.full_name, "full_name")?;
        let email = require(self.email, "email")?;
        let role = parse_role(&require(self.role, "role")?)?;

        check(validate_username(&username), ErrorCode::UserNameInvalid)?;
        check(validate_email(&email), ErrorCode::UserEmailInvalid)?;

        Ok((
            id,
            UserUpdate {
                username,
                full_name,
                email,
                role,
            },
        ))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserIdRequest {
    #[serde(deserialize_with = "fields::positive_int")]
    pub id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_requires_every_field() {
        let req: CreateUserRequest = serde_json::from_value(json!({
            "username": "alice",
            "password": "pw",
            "full_name": "Alice",
            "email": "alice@example.com"
        }))
        .expect("deserialize");
        let err = req.into_new_user().unwrap_err();
        assert!(err.message.contains("role"));
    }

    #[test]
    fn test_create_request_rejects_unknown_role() {
        let req: CreateUserRequest = serde_json::from_value(json!({
            "username": "alice",
            "password": "pw",
            "full_name": "Alice",
            "email": "alice@example.com",
            "role": "recruiter"
        }))
        .expect("deserialize");
        assert_eq!(req.into_new_user().unwrap_err().code, ErrorCode::UserRoleInvalid);
    }

    #[test]
    fn test_update_request_accepts_string_id() {
        let req: UpdateUserRequest = serde_json::from_value(json!({
            "id": "7",
            "username": "bob",
            "full_name": "Bob",
            "email": "bob@example.com",
            "role": "admin"
        }))
        .expect("deserialize");
        let (id, update) = req.into_update().expect("valid");
        assert_eq!(id, 7);
        assert_eq!(update.role, UserRole::Admin);
    }
}
