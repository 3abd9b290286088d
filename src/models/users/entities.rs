use serde::{Deserialize, Serialize};

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    SuperAdmin, // 超级管理员
    Admin,      // 管理员
    Candidate,  // 候选人
}

impl UserRole {
    pub const SUPERADMIN: &'static str = "superadmin";
    pub const ADMIN: &'static str = "admin";
    pub const CANDIDATE: &'static str = "candidate";

    pub fn superadmin_roles() -> &'static [&'static UserRole] {
        &[&Self::SuperAdmin]
    }
    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::SuperAdmin, &Self::Admin]
    }
    pub fn candidate_roles() -> &'static [&'static UserRole] {
        &[&Self::Candidate]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::SuperAdmin, &Self::Admin, &Self::Candidate]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => Self::SUPERADMIN,
            UserRole::Admin => Self::ADMIN,
            UserRole::Candidate => Self::CANDIDATE,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::SuperAdmin | UserRole::Admin)
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            UserRole::SUPERADMIN => Ok(UserRole::SuperAdmin),
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::CANDIDATE => Ok(UserRole::Candidate),
            _ => Err(format!(
                "Invalid user role: '{s}'. Supported roles: superadmin, admin, candidate"
            )),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)] // 不序列化到JSON响应中
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 写入存储层的新用户，password 已经是哈希
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_and_display() {
        assert_eq!("superadmin".parse::<UserRole>(), Ok(UserRole::SuperAdmin));
        assert_eq!(" Admin ".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!(UserRole::Candidate.to_string(), "candidate");
        assert!("recruiter".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_admin_roles_cover_superadmin() {
        assert!(UserRole::admin_roles().contains(&&UserRole::SuperAdmin));
        assert!(!UserRole::admin_roles().contains(&&UserRole::Candidate));
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Candidate.is_admin());
    }

    #[test]
    fn test_password_is_not_serialized() {
        let user = User {
            id: 1,
            username: "root".into(),
            password: "secret".into(),
            full_name: "Root".into(),
            email: "root@example.com".into(),
            role: UserRole::SuperAdmin,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let value = serde_json::to_value(&user).expect("serialize");
        assert!(value.get("password").is_none());
        assert_eq!(value["role"], "superadmin");
    }
}
