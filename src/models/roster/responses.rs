use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生档案（查询命中后的展示信息）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/roster.ts")]
pub struct StudentProfile {
    pub email: String,
    pub name: String,
    #[serde(rename = "class")]
    #[ts(rename = "class")]
    pub class_name: String,
}

/// 花名册重新加载结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/roster.ts")]
pub struct RosterReloadResponse {
    pub total: usize,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}
