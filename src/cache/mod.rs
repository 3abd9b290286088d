//! 会话存储层
//!
//! `ObjectCache` 抽象出键值后端，Redis 为主、Moka 内存缓存为回退。
//! 后端通过 `declare_object_cache_plugin!` 在进程启动时注册到插件表。

pub mod object_cache;
pub mod register;
pub mod session;
pub mod traits;

pub use session::SessionStore;
pub use traits::{CacheResult, ObjectCache};

/// 声明并注册一个缓存后端插件
///
/// 类型需提供 `fn new() -> Result<Self, String>`。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::RecruitError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}
