use std::sync::Arc;

use tracing::debug;

use super::{CacheResult, ObjectCache};

/// 会话存储：每个用户名只保留一个有效令牌，键为 `token:{username}`
#[derive(Clone)]
pub struct SessionStore {
    cache: Arc<dyn ObjectCache>,
}

impl SessionStore {
    pub fn new(cache: Arc<dyn ObjectCache>) -> Self {
        Self { cache }
    }

    pub fn key(username: &str) -> String {
        format!("token:{username}")
    }

    /// 登录成功后写入，覆盖旧令牌
    pub async fn store(&self, username: &str, token: &str, ttl: u64) {
        self.cache
            .insert_raw(Self::key(username), token.to_string(), ttl)
            .await;
    }

    /// 令牌必须与存储中的值完全一致
    pub async fn is_active(&self, username: &str, token: &str) -> bool {
        match self.cache.get_raw(&Self::key(username)).await {
            CacheResult::Found(stored) => stored == token,
            CacheResult::NotFound => false,
            CacheResult::ExistsButNoValue => {
                debug!("Session backend unavailable for user {}", username);
                false
            }
        }
    }

    pub async fn revoke(&self, username: &str) {
        self.cache.remove(&Self::key(username)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MokaCacheWrapper::with_capacity(100, 60)))
    }

    #[test]
    fn test_session_key_format() {
        assert_eq!(SessionStore::key("admin"), "token:admin");
    }

    #[tokio::test]
    async fn test_only_latest_token_is_active() {
        let sessions = store();
        sessions.store("admin", "first", 60).await;
        sessions.store("admin", "second", 60).await;

        assert!(!sessions.is_active("admin", "first").await);
        assert!(sessions.is_active("admin", "second").await);
    }

    #[tokio::test]
    async fn test_revoke_invalidates_token() {
        let sessions = store();
        sessions.store("admin", "tok", 60).await;
        sessions.revoke("admin").await;
        assert!(!sessions.is_active("admin", "tok").await);
    }
}
