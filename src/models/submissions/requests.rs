use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

/// 提交上传参数（HTTP 查询参数，文件本身走 multipart）
///
/// 以邮箱识别学生，存储目录使用花名册中的学生姓名
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/submission.ts")]
pub struct SubmissionParams {
    pub email: String,
    pub date: Option<NaiveDate>,
}

impl SubmissionParams {
    /// 解析生效日期，缺省取当天
    pub fn effective_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
