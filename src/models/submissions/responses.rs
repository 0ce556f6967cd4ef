use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 提交回执
///
/// stored_path 是相对上传根目录的存储路径，同名重复上传会覆盖
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/submission.ts")]
pub struct SubmissionReceipt {
    pub receipt_id: String,
    pub student: String,
    pub date: NaiveDate,
    pub file_name: String,
    pub stored_path: String,
    pub size: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
