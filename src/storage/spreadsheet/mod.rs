//! 基于表格文件的花名册存储
//!
//! 支持 XLSX（calamine）与 CSV（csv crate），按文件扩展名选择解析器。

pub mod parse;

use std::path::{Path, PathBuf};

use crate::errors::{Result, TuitionHubError};
use crate::models::roster::entities::Roster;

use super::RosterStore;

pub struct SpreadsheetRosterStore {
    path: PathBuf,
    sheet: String,
}

impl SpreadsheetRosterStore {
    pub fn new(path: &Path, sheet: &str) -> Self {
        Self {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl RosterStore for SpreadsheetRosterStore {
    async fn load_roster(&self) -> Result<Roster> {
        let path = self.path.clone();
        let sheet = self.sheet.clone();

        // 表格解析是同步 I/O，放到阻塞线程执行
        tokio::task::spawn_blocking(move || parse::load_from_path(&path, &sheet))
            .await
            .map_err(|e| {
                TuitionHubError::roster_source(format!("Roster load task failed: {e}"))
            })?
    }

    fn source_description(&self) -> String {
        format!("{} (sheet: {})", self.path.display(), self.sheet)
    }
}
