pub mod common;
pub mod homeworks;
pub mod roster;
pub mod submissions;
pub mod system;

pub use common::error_code::ErrorCode;
pub use common::response::ApiResponse;

// 程序启动时间，作为 app data 注入，用于系统状态接口
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
