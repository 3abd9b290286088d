use crate::config::AppConfig;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (用户名，同时是会话键)
    pub uid: i64,     // 用户 ID
    pub role: String, // 用户角色
    pub exp: usize,   // Expiration time (时间戳)
    pub iat: usize,   // Issued at (签发时间)
}

impl Claims {
    pub fn username(&self) -> &str {
        &self.sub
    }
}

/// 令牌校验失败的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    Expired,
    Invalid,
}

impl TokenError {
    pub fn message(&self) -> &'static str {
        match self {
            TokenError::Expired => "Token has expired",
            TokenError::Invalid => "Invalid token",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    }
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    /// 使用配置的密钥和有效期签发令牌
    pub fn generate_token(
        user_id: i64,
        username: &str,
        role: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_secret(
            &Self::get_secret(),
            user_id,
            username,
            role,
            chrono::Duration::seconds(config.jwt.token_expiry as i64),
        )
    }

    // 生成带自定义密钥和过期时间的 Token
    pub fn generate_token_with_secret(
        secret: &str,
        user_id: i64,
        username: &str,
        role: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: username.to_string(),
            uid: user_id,
            role: role.to_string(),
            exp: expiration.timestamp().max(0) as usize,
            iat: now.timestamp() as usize,
        };

        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, TokenError> {
        Self::verify_token_with_secret(token, &Self::get_secret())
    }

    pub fn verify_token_with_secret(token: &str, secret: &str) -> Result<Claims, TokenError> {
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(TokenError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_issue_and_verify() {
        let token = JwtUtils::generate_token_with_secret(
            SECRET,
            7,
            "recruiter",
            "admin",
            chrono::Duration::hours(1),
        )
        .expect("token should be signed");

        let claims = JwtUtils::verify_token_with_secret(&token, SECRET).expect("valid token");
        assert_eq!(claims.username(), "recruiter");
        assert_eq!(claims.uid, 7);
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = JwtUtils::generate_token_with_secret(
            SECRET,
            1,
            "recruiter",
            "admin",
            chrono::Duration::hours(1),
        )
        .expect("token should be signed");

        assert_eq!(
            JwtUtils::verify_token_with_secret(&token, "other-secret").unwrap_err(),
            TokenError::Invalid
        );
    }

    #[test]
    fn test_expired_token() {
        let token = JwtUtils::generate_token_with_secret(
            SECRET,
            1,
            "recruiter",
            "admin",
            chrono::Duration::minutes(-10),
        )
        .expect("token should be signed");

        assert_eq!(
            JwtUtils::verify_token_with_secret(&token, SECRET).unwrap_err(),
            TokenError::Expired
        );
    }

    #[test]
    fn test_garbage_token() {
        assert_eq!(
            JwtUtils::verify_token_with_secret("not-a-jwt", SECRET).unwrap_err(),
            TokenError::Invalid
        );
    }
}
