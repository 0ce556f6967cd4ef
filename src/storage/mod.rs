use std::path::Path;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::roster::entities::Roster;

pub mod spreadsheet;

#[async_trait::async_trait]
pub trait RosterStore: Send + Sync {
    /// 花名册管理方法
    // 从外部表格源读取完整花名册
    async fn load_roster(&self) -> Result<Roster>;
    // 数据源描述，用于日志输出
    fn source_description(&self) -> String;
}

pub async fn create_storage() -> Result<Arc<dyn RosterStore>> {
    let config = AppConfig::get();
    let store = spreadsheet::SpreadsheetRosterStore::new(
        Path::new(&config.roster.path),
        &config.roster.sheet,
    );

    if !Path::new(&config.roster.path).exists() {
        tracing::warn!(
            "Roster source {} does not exist yet; lookups will fail until it appears",
            config.roster.path
        );
    }

    Ok(Arc::new(store))
}
