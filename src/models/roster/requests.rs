use serde::Deserialize;
use ts_rs::TS;

/// 学生登录（按邮箱查询花名册）请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/roster.ts")]
pub struct StudentLookupRequest {
    pub email: String,
}
