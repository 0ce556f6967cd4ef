//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_tuitionhub_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum TuitionHubError {
            $($variant(String),)*
        }

        impl TuitionHubError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(TuitionHubError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(TuitionHubError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(TuitionHubError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl TuitionHubError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        TuitionHubError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_tuitionhub_errors! {
    RosterSource("E001", "Roster Source Error"),
    RosterFormat("E002", "Roster Format Error"),
    CachePluginNotFound("E003", "Cache Plugin Not Found"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Serialization("E007", "Serialization Error"),
    DateParse("E008", "Date Parse Error"),
}

impl TuitionHubError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for TuitionHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for TuitionHubError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for TuitionHubError {
    fn from(err: std::io::Error) -> Self {
        TuitionHubError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for TuitionHubError {
    fn from(err: serde_json::Error) -> Self {
        TuitionHubError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for TuitionHubError {
    fn from(err: chrono::ParseError) -> Self {
        TuitionHubError::DateParse(err.to_string())
    }
}

impl From<calamine::XlsxError> for TuitionHubError {
    fn from(err: calamine::XlsxError) -> Self {
        TuitionHubError::RosterSource(err.to_string())
    }
}

impl From<csv::Error> for TuitionHubError {
    fn from(err: csv::Error) -> Self {
        TuitionHubError::RosterFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TuitionHubError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TuitionHubError::roster_source("test").code(), "E001");
        assert_eq!(TuitionHubError::roster_format("test").code(), "E002");
        assert_eq!(TuitionHubError::validation("test").code(), "E005");
        assert_eq!(TuitionHubError::not_found("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            TuitionHubError::roster_source("test").error_type(),
            "Roster Source Error"
        );
        assert_eq!(
            TuitionHubError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = TuitionHubError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = TuitionHubError::not_found("No homework for 2024-05-01");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("2024-05-01"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: TuitionHubError = io_err.into();
        assert_eq!(err.code(), "E004");
    }
}
