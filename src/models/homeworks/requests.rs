use chrono::NaiveDate;
use serde::Deserialize;
use ts_rs::TS;

/// 作业查询参数（HTTP 请求）
///
/// date 为 ISO 8601 日期，如 "2024-05-01"；缺省时取当天
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/homework.ts")]
pub struct HomeworkQuery {
    pub class: String,
    pub date: Option<NaiveDate>,
}

impl HomeworkQuery {
    /// 解析生效日期，缺省取当天
    pub fn effective_date(&self) -> NaiveDate {
        self.date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}
