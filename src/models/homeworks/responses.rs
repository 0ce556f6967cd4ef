use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 作业可用性查询结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/homework.ts")]
pub struct HomeworkStatusResponse {
    #[serde(rename = "class")]
    #[ts(rename = "class")]
    pub class_name: String,
    pub date: NaiveDate,
    pub available: bool,
    /// 可用时的下载文件名，如 "2024-05-01.docx"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}
