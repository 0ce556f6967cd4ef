use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::services::roster::load::get_or_load_roster;
use crate::storage::RosterStore;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn RosterStore>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    // 根据配置选择缓存后端
    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);
    }

    // 如果配置的缓存不可用，回退到默认的内存缓存
    if cache_type != "moka"
        && let Some(fallback_constructor) = get_object_cache_plugin("moka")
    {
        match fallback_constructor().await {
            Ok(cache) => {
                warn!("Successfully created fallback Moka (in-memory) cache backend");
                return Ok(Arc::from(cache));
            }
            Err(fallback_e) => {
                warn!("Failed to create fallback Moka cache: {}", fallback_e);
            }
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 确保作业与上传目录存在
///
/// create_dir_all 幂等，目录已存在时不报错
fn ensure_directories() {
    let config = AppConfig::get();

    for dir in [&config.homework.dir, &config.upload.dir] {
        if Path::new(dir).exists() {
            continue;
        }
        match std::fs::create_dir_all(dir) {
            Ok(_) => info!("Created directory: {}", dir),
            Err(e) => warn!("Failed to create directory {}: {}", dir, e),
        }
    }
}

/// 预热花名册缓存
///
/// 失败只记录告警，首次查询时会再次尝试加载
async fn preload_roster(storage: &Arc<dyn RosterStore>, cache: &Arc<dyn ObjectCache>) {
    match get_or_load_roster(storage, cache).await {
        Ok(roster) => {
            info!(
                "Roster preloaded from {} ({} entries)",
                storage.source_description(),
                roster.len()
            );
        }
        Err(e) => {
            warn!(
                "Roster preload failed: {}, lookups will retry on demand",
                e
            );
        }
    }
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和目录准备等
pub async fn prepare_server_startup() -> StartupContext {
    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create roster storage backend");
    warn!("Roster storage backend initialized");

    // 创建缓存实例
    let cache = create_cache().await.expect("Failed to create cache");
    warn!("Cache backend initialized");

    // 准备作业与上传目录
    ensure_directories();

    // 预热花名册缓存
    preload_roster(&storage, &cache).await;

    StartupContext { storage, cache }
}
