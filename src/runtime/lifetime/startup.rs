use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::users::entities::{NewUser, UserRole};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

const FALLBACK_CACHE: &str = "moka";

/// 会话存储后端：先试配置的类型，失败后退回进程内 Moka
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let configured = AppConfig::get().cache.cache_type.as_str();
    let mut candidates = vec![configured];
    if configured != FALLBACK_CACHE {
        candidates.push(FALLBACK_CACHE);
    }

    for backend in &candidates {
        let Some(constructor) = get_object_cache_plugin(backend) else {
            warn!("Cache backend '{}' not found in registry", backend);
            continue;
        };
        match constructor().await {
            Ok(cache) => {
                if *backend != configured {
                    warn!(
                        "Sessions will be kept in memory ({}); they are lost on restart",
                        backend
                    );
                }
                warn!("Using {} cache backend for sessions", backend);
                return Ok(Arc::from(cache));
            }
            Err(e) => warn!("Failed to create {} cache: {}", backend, e),
        }
    }

    Err(format!("No cache backend available (tried: {})", candidates.join(", ")).into())
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化超级管理员账号
/// 数据库中没有任何 superadmin 时创建一个，保证 data_admin 接口可用
async fn seed_superadmin(storage: &Arc<dyn Storage>) {
    match storage.count_users_by_role(UserRole::SuperAdmin).await {
        Ok(count) if count > 0 => {
            debug!(
                "Database already has {} superadmin(s), skipping seed",
                count
            );
            return;
        }
        Ok(_) => {
            info!("No superadmin found in database, creating default account...");
        }
        Err(e) => {
            warn!("Failed to count superadmins: {}, skipping seed", e);
            return;
        }
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated superadmin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let password_hash = match hash_password(&password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash superadmin password: {}, skipping seed", e);
            return;
        }
    };

    let superadmin = NewUser {
        username: "superadmin".to_string(),
        password: password_hash,
        full_name: "Super Administrator".to_string(),
        email: "superadmin@localhost".to_string(),
        role: UserRole::SuperAdmin,
    };

    match storage.create_user(superadmin).await {
        Ok(user) => {
            info!(
                "Default superadmin account created (ID: {}, username: {})",
                user.id, user.username
            );
        }
        Err(e) => {
            warn!("Failed to create superadmin account: {}", e);
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和默认账号
pub async fn prepare_server_startup() -> Result<StartupContext, Box<dyn std::error::Error>> {
    // 重复安装只会返回 Err，忽略即可
    let _ = rustls::crypto::ring::default_provider().install_default();

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_superadmin(&storage).await;

    // 创建缓存实例
    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::SeaOrmStorage;
    use crate::utils::password::is_password_hash;
    use sea_orm::{ConnectOptions, Database};

    async fn storage() -> Arc<dyn Storage> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.expect("connect sqlite");
        Arc::new(
            SeaOrmStorage::from_connection(db)
                .await
                .expect("run migrations"),
        )
    }

    #[test]
    fn test_generated_password_length() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }

    #[tokio::test]
    async fn test_seed_superadmin_runs_once() {
        let storage = storage().await;

        seed_superadmin(&storage).await;
        seed_superadmin(&storage).await;

        let superadmins = storage
            .list_users_by_role(UserRole::SuperAdmin)
            .await
            .unwrap();
        assert_eq!(superadmins.len(), 1);
        assert_eq!(superadmins[0].username, "superadmin");

        let stored = storage
            .get_user_by_username("superadmin")
            .await
            .unwrap()
            .unwrap();
        assert!(is_password_hash(&stored.password));
    }
}
