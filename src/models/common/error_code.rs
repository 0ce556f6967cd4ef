use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 业务错误码
// 分段规则：0 成功，1xxx 请求/参数，2xxx 花名册，3xxx 作业，4xxx 提交文件，5xxx 系统
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    InvalidEmail = 1001,
    InvalidClassLabel = 1002,
    InvalidDate = 1003,
    RateLimitExceeded = 1429,

    RosterUnavailable = 2001,
    RosterFormatInvalid = 2002,
    StudentNotFound = 2404,

    HomeworkNotFound = 3404,

    FileUploadFailed = 4001,
    FileTypeNotAllowed = 4002,
    FileSizeExceeded = 4003,
    MultifileUploadNotAllowed = 4004,
    FileNotFound = 4404,

    InternalServerError = 5000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::StudentNotFound as i32, 2404);
        assert_eq!(ErrorCode::HomeworkNotFound as i32, 3404);
        assert_eq!(ErrorCode::FileTypeNotAllowed as i32, 4002);
    }
}
