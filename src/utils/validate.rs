use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email.trim()) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验将拼入文件系统路径的单段名称（班级、学生姓名）
///
/// 不允许为空、包含路径分隔符或指向上级目录
pub fn validate_path_component(value: &str) -> Result<(), &'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Err("Value must not be empty");
    }
    if value.contains('/') || value.contains('\\') {
        return Err("Value must not contain path separators");
    }
    if value == "." || value == ".." {
        return Err("Value must not reference parent directories");
    }
    if value.contains('\0') {
        return Err("Value must not contain NUL bytes");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("student.name+tag@school.edu.in").is_ok());
        assert!(validate_email("  padded@x.com  ").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@x.com").is_err());
    }

    #[test]
    fn test_valid_path_component() {
        assert!(validate_path_component("6").is_ok());
        assert!(validate_path_component("Asha").is_ok());
        assert!(validate_path_component("Class 8B").is_ok());
    }

    #[test]
    fn test_invalid_path_component() {
        assert!(validate_path_component("").is_err());
        assert!(validate_path_component("   ").is_err());
        assert!(validate_path_component("..").is_err());
        assert!(validate_path_component("a/b").is_err());
        assert!(validate_path_component("a\\b").is_err());
    }
}
