//! 作业与提交文件的路径推导
//!
//! 路径是输入的纯函数，不做任何 I/O；存在性由调用方自行检查。

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// 作业文档的文件名，如 "2024-05-01.docx"
pub fn homework_file_name(date: NaiveDate, extension: &str) -> String {
    format!("{}.{}", date.format("%Y-%m-%d"), extension)
}

/// 作业文档路径：`<root>/<class>/<YYYY-MM-DD>.<ext>`
pub fn homework_file_path(
    root: &Path,
    class_name: &str,
    date: NaiveDate,
    extension: &str,
) -> PathBuf {
    root.join(class_name)
        .join(homework_file_name(date, extension))
}

/// 提交目录：`<root>/<student>/<YYYY-MM-DD>`
pub fn submission_dir(root: &Path, student: &str, date: NaiveDate) -> PathBuf {
    root.join(student).join(date.format("%Y-%m-%d").to_string())
}

/// 去掉客户端文件名里可能带上的目录前缀
///
/// 拒绝空名与 "." / ".."
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let normalized = name.replace('\\', "/");
    let base = normalized.rsplit('/').next().unwrap_or_default().trim();
    if base.is_empty() || base == "." || base == ".." {
        return None;
    }
    Some(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_homework_file_path() {
        let path = homework_file_path(Path::new("HOMEWORK"), "8", date(2024, 5, 1), "docx");
        assert_eq!(path, PathBuf::from("HOMEWORK/8/2024-05-01.docx"));
    }

    #[test]
    fn test_homework_file_path_is_pure() {
        let a = homework_file_path(Path::new("HOMEWORK"), "6", date(2024, 12, 31), "docx");
        let b = homework_file_path(Path::new("HOMEWORK"), "6", date(2024, 12, 31), "docx");
        assert_eq!(a, b);
    }

    #[test]
    fn test_homework_file_name_zero_pads() {
        assert_eq!(homework_file_name(date(2024, 5, 1), "docx"), "2024-05-01.docx");
        assert_eq!(homework_file_name(date(2024, 11, 20), "pdf"), "2024-11-20.pdf");
    }

    #[test]
    fn test_submission_dir() {
        let dir = submission_dir(Path::new("uploads"), "Asha", date(2024, 5, 1));
        assert_eq!(dir, PathBuf::from("uploads/Asha/2024-05-01"));
    }

    #[test]
    fn test_sanitize_file_name_plain() {
        assert_eq!(sanitize_file_name("page1.jpg").as_deref(), Some("page1.jpg"));
    }

    #[test]
    fn test_sanitize_file_name_strips_directories() {
        assert_eq!(
            sanitize_file_name("/tmp/evil/page1.jpg").as_deref(),
            Some("page1.jpg")
        );
        assert_eq!(
            sanitize_file_name("C:\\Users\\kid\\page1.jpg").as_deref(),
            Some("page1.jpg")
        );
        assert_eq!(
            sanitize_file_name("../../etc/passwd").as_deref(),
            Some("passwd")
        );
    }

    #[test]
    fn test_sanitize_file_name_rejects_empty() {
        assert!(sanitize_file_name("").is_none());
        assert!(sanitize_file_name("  ").is_none());
        assert!(sanitize_file_name("..").is_none());
        assert!(sanitize_file_name("dir/").is_none());
    }
}
