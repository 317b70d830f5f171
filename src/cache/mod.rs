//! 缓存层
//!
//! 认证路径上的用户信息查询走这里，后端可插拔：
//! 默认 Moka 进程内缓存，多实例部署时切到 Redis。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 注册缓存插件的宏
///
/// 在进程启动时（ctor 阶段）把构造函数塞进注册表，
/// 运行时按配置的名字取用。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $constructor:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $constructor:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = $constructor::new()
                                .map_err($crate::errors::SchoolSystemError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
