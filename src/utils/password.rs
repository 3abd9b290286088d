use crate::config::AppConfig;
use crate::errors::RecruitError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str) -> Result<String, RecruitError> {
    let config = AppConfig::get();
    let params = Params::new(
        config.argon2.memory_cost,
        config.argon2.time_cost,
        config.argon2.parallelism,
        None,
    )
    .map_err(|e| RecruitError::password_hash(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RecruitError::password_hash(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

/// 旧系统写入的 bcrypt 哈希：`$2a$`/`$2b$`/`$2y$` 前缀，固定 60 个字符
fn is_bcrypt_hash(stored: &str) -> bool {
    stored.len() == 60 && ["$2a$", "$2b$", "$2y$"].iter().any(|p| stored.starts_with(p))
}

/// 存储值是否为哈希（Argon2 PHC 或旧系统的 bcrypt）
pub fn is_password_hash(stored: &str) -> bool {
    is_bcrypt_hash(stored) || PasswordHash::new(stored).is_ok()
}

/// 验证密码
///
/// 依次尝试 bcrypt、Argon2，都不是哈希时视为历史遗留的明文密码直接比较。
pub fn verify_password(password: &str, stored: &str) -> bool {
    if is_bcrypt_hash(stored) {
        return bcrypt::verify(password, stored).unwrap_or(false);
    }
    match PasswordHash::new(stored) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => !stored.is_empty() && password == stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("s3cret-pass").expect("hash should succeed");
        assert!(is_password_hash(&hash));
        assert!(verify_password("s3cret-pass", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_plaintext_fallback() {
        assert!(!is_password_hash("legacy123"));
        assert!(verify_password("legacy123", "legacy123"));
        assert!(!verify_password("legacy124", "legacy123"));
        assert!(!verify_password("", ""));
    }

    #[test]
    fn test_bcrypt_legacy() {
        let stored = bcrypt::hash("rahasia123", 4).expect("bcrypt hash should succeed");
        assert_eq!(stored.len(), 60);
        assert!(is_password_hash(&stored));
        assert!(verify_password("rahasia123", &stored));
        assert!(!verify_password("rahasia124", &stored));

        // 旧系统常见的 $2y$ 前缀
        let php_style = stored.replacen("$2b$", "$2y$", 1);
        assert!(verify_password("rahasia123", &php_style));
    }
}
