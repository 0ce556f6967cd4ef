//! 花名册的加载与缓存
//!
//! 花名册在缓存 TTL 内对所有请求复用，避免每次交互重读表格文件。
//! 显式刷新见 reload。

use std::sync::Arc;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::errors::{Result, TuitionHubError};
use crate::models::ErrorCode;
use crate::models::roster::entities::Roster;
use crate::storage::RosterStore;

pub(crate) const ROSTER_CACHE_KEY: &str = "roster:v1";

/// 取缓存的花名册，未命中则从表格源加载并写入缓存
pub(crate) async fn get_or_load_roster(
    storage: &Arc<dyn RosterStore>,
    cache: &Arc<dyn ObjectCache>,
) -> Result<Roster> {
    if let CacheResult::Found(json) = cache.get_raw(ROSTER_CACHE_KEY).await {
        match serde_json::from_str::<Roster>(&json) {
            Ok(roster) => return Ok(roster),
            Err(e) => {
                tracing::warn!("Cached roster is corrupt, reloading from source: {}", e);
                cache.remove(ROSTER_CACHE_KEY).await;
            }
        }
    }

    let roster = storage.load_roster().await?;
    tracing::info!(
        "Roster loaded from {} ({} entries)",
        storage.source_description(),
        roster.len()
    );

    cache_roster(cache, &roster).await;
    Ok(roster)
}

/// 强制从表格源重新加载并刷新缓存
pub(crate) async fn force_reload_roster(
    storage: &Arc<dyn RosterStore>,
    cache: &Arc<dyn ObjectCache>,
) -> Result<Roster> {
    cache.remove(ROSTER_CACHE_KEY).await;
    let roster = storage.load_roster().await?;
    cache_roster(cache, &roster).await;
    Ok(roster)
}

async fn cache_roster(cache: &Arc<dyn ObjectCache>, roster: &Roster) {
    let ttl = AppConfig::get().roster.cache_ttl;
    match serde_json::to_string(roster) {
        Ok(json) => cache.insert_raw(ROSTER_CACHE_KEY.to_string(), json, ttl).await,
        Err(e) => tracing::warn!("Failed to serialize roster for caching: {}", e),
    }
}

/// 将花名册加载错误映射为业务错误码
pub(crate) fn roster_error_code(err: &TuitionHubError) -> ErrorCode {
    match err {
        TuitionHubError::RosterFormat(_) => ErrorCode::RosterFormatInvalid,
        _ => ErrorCode::RosterUnavailable,
    }
}
