//! 花名册表格解析
//!
//! 必需列：`Gmail ID`、`Student Name`、`Class`。
//! 表头按去除首尾空白后匹配（大小写不敏感），缺列立即报错。

use calamine::{Reader, Xlsx, open_workbook};
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use crate::errors::{Result, TuitionHubError};
use crate::models::roster::entities::{Roster, RosterEntry};

/// 邮箱列表头
pub const COLUMN_EMAIL: &str = "Gmail ID";
/// 学生姓名列表头
pub const COLUMN_NAME: &str = "Student Name";
/// 班级列表头
pub const COLUMN_CLASS: &str = "Class";

/// 根据扩展名选择解析器读取花名册
pub fn load_from_path(path: &Path, sheet: &str) -> Result<Roster> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" => parse_xlsx(path, sheet),
        _ => {
            let data = std::fs::read(path).map_err(|e| {
                TuitionHubError::roster_source(format!(
                    "Cannot read roster file {}: {e}",
                    path.display()
                ))
            })?;
            parse_csv(&data)
        }
    }
}

/// 从 XLSX 工作表解析花名册
pub fn parse_xlsx(path: &Path, sheet: &str) -> Result<Roster> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
        TuitionHubError::roster_source(format!(
            "Cannot open roster workbook {}: {e}",
            path.display()
        ))
    })?;

    let range = workbook.worksheet_range(sheet).map_err(|e| {
        TuitionHubError::roster_source(format!("Cannot read worksheet '{sheet}': {e}"))
    })?;

    let mut rows_iter = range.rows();

    // 读取表头
    let header_row = rows_iter
        .next()
        .ok_or_else(|| TuitionHubError::roster_format("Roster sheet has no header row"))?;
    let header_map: HashMap<String, usize> = header_row
        .iter()
        .enumerate()
        .map(|(i, cell)| (normalize_header(&cell.to_string()), i))
        .collect();

    let email_idx = required_column(&header_map, COLUMN_EMAIL)?;
    let name_idx = required_column(&header_map, COLUMN_NAME)?;
    let class_idx = required_column(&header_map, COLUMN_CLASS)?;

    let mut entries = Vec::new();

    for row in rows_iter {
        let get_cell = |idx: usize| -> String {
            row.get(idx)
                .map(|c| c.to_string().trim().to_string())
                .unwrap_or_default()
        };

        let email = get_cell(email_idx);
        // 跳过邮箱为空的行（表格尾部的空行很常见）
        if email.is_empty() {
            continue;
        }

        entries.push(RosterEntry {
            email,
            name: get_cell(name_idx),
            class_name: get_cell(class_idx),
        });
    }

    Ok(Roster::new(entries))
}

/// 从 CSV 内容解析花名册
pub fn parse_csv(data: &[u8]) -> Result<Roster> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(data));

    // 检查表头
    let headers = rdr
        .headers()
        .map_err(|e| TuitionHubError::roster_format(format!("Cannot read roster header: {e}")))?;
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| (normalize_header(h), i))
        .collect();

    let email_idx = required_column(&header_map, COLUMN_EMAIL)?;
    let name_idx = required_column(&header_map, COLUMN_NAME)?;
    let class_idx = required_column(&header_map, COLUMN_CLASS)?;

    let mut entries = Vec::new();

    for (row_num, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            TuitionHubError::roster_format(format!("Row {} parse failed: {e}", row_num + 2))
        })?;

        let get_cell = |idx: usize| -> String {
            record.get(idx).unwrap_or("").trim().to_string()
        };

        let email = get_cell(email_idx);
        if email.is_empty() {
            continue;
        }

        entries.push(RosterEntry {
            email,
            name: get_cell(name_idx),
            class_name: get_cell(class_idx),
        });
    }

    Ok(Roster::new(entries))
}

fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

fn required_column(header_map: &HashMap<String, usize>, column: &str) -> Result<usize> {
    header_map
        .get(&normalize_header(column))
        .copied()
        .ok_or_else(|| {
            TuitionHubError::roster_format(format!("Missing required column: {column}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &[u8] =
        b"Gmail ID,Student Name,Class\na@x.com,Asha,6\nb@x.com,Bala,8\n";

    #[test]
    fn test_parse_csv_basic() {
        let roster = parse_csv(SAMPLE_CSV).unwrap();
        assert_eq!(roster.len(), 2);
        let entry = &roster.entries()[0];
        assert_eq!(entry.email, "a@x.com");
        assert_eq!(entry.name, "Asha");
        assert_eq!(entry.class_name, "6");
    }

    #[test]
    fn test_parse_csv_preserves_order() {
        let roster = parse_csv(SAMPLE_CSV).unwrap();
        let names: Vec<&str> = roster.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Asha", "Bala"]);
    }

    #[test]
    fn test_parse_csv_trims_headers_and_cells() {
        let data = b"  Gmail ID , Student Name ,  Class \n  a@x.com ,  Asha , 6 \n";
        let roster = parse_csv(data).unwrap();
        let entry = &roster.entries()[0];
        assert_eq!(entry.email, "a@x.com");
        assert_eq!(entry.name, "Asha");
        assert_eq!(entry.class_name, "6");
    }

    #[test]
    fn test_parse_csv_missing_column() {
        let data = b"Gmail ID,Student Name\na@x.com,Asha\n";
        let err = parse_csv(data).unwrap_err();
        assert_eq!(err.code(), "E002");
        assert!(err.message().contains("Class"));
    }

    #[test]
    fn test_parse_csv_skips_empty_email_rows() {
        let data = b"Gmail ID,Student Name,Class\na@x.com,Asha,6\n,,\n  ,Ghost,9\n";
        let roster = parse_csv(data).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_parse_csv_keeps_duplicate_emails() {
        // 重复邮箱不去重，由查询端按「先到先得」处理
        let data = b"Gmail ID,Student Name,Class\ndup@x.com,First,6\nDUP@X.COM,Second,7\n";
        let roster = parse_csv(data).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_by_email("dup@x.com").unwrap().name, "First");
    }

    #[test]
    fn test_parse_csv_then_case_insensitive_lookup() {
        let roster = parse_csv(SAMPLE_CSV).unwrap();
        let entry = roster.find_by_email("A@X.COM").unwrap();
        assert_eq!(entry.name, "Asha");
        assert_eq!(entry.class_name, "6");
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let err = load_from_path(Path::new("definitely-missing-roster.csv"), "Sheet1")
            .unwrap_err();
        assert_eq!(err.code(), "E001");
    }
}
