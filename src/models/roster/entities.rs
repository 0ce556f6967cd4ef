use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 花名册条目
// 邮箱为大小写不敏感的唯一键，name/class 用于定位作业与提交目录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/types/generated/roster.ts")]
pub struct RosterEntry {
    pub email: String,
    pub name: String,
    #[serde(rename = "class")]
    #[ts(rename = "class")]
    pub class_name: String,
}

/// 会话内不可变的花名册
///
/// 从表格源一次性加载，之后只读。查询不会修改条目顺序，
/// 同一输入的匹配结果是确定的。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// 按邮箱精确匹配（大小写不敏感）
    ///
    /// 若存在重复邮箱，返回第一条匹配的记录
    pub fn find_by_email(&self, email: &str) -> Option<&RosterEntry> {
        let email = email.trim();
        self.entries
            .iter()
            .find(|entry| entry.email.eq_ignore_ascii_case(email))
    }
}

impl From<Vec<RosterEntry>> for Roster {
    fn from(entries: Vec<RosterEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roster() -> Roster {
        Roster::new(vec![
            RosterEntry {
                email: "a@x.com".to_string(),
                name: "Asha".to_string(),
                class_name: "6".to_string(),
            },
            RosterEntry {
                email: "b@x.com".to_string(),
                name: "Bala".to_string(),
                class_name: "8".to_string(),
            },
        ])
    }

    #[test]
    fn test_find_by_email_exact() {
        let roster = sample_roster();
        let entry = roster.find_by_email("a@x.com").unwrap();
        assert_eq!(entry.name, "Asha");
        assert_eq!(entry.class_name, "6");
    }

    #[test]
    fn test_find_by_email_case_insensitive() {
        let roster = sample_roster();
        // 任意大小写变体都应命中同一条记录
        for variant in ["A@X.COM", "a@X.com", "A@x.CoM"] {
            let entry = roster.find_by_email(variant).unwrap();
            assert_eq!(entry.name, "Asha");
            assert_eq!(entry.class_name, "6");
        }
    }

    #[test]
    fn test_find_by_email_trims_input() {
        let roster = sample_roster();
        let entry = roster.find_by_email("  b@x.com  ").unwrap();
        assert_eq!(entry.name, "Bala");
    }

    #[test]
    fn test_find_by_email_not_found() {
        let roster = sample_roster();
        assert!(roster.find_by_email("missing@x.com").is_none());
        assert!(roster.find_by_email("").is_none());
    }

    #[test]
    fn test_duplicate_email_first_match_wins() {
        let roster = Roster::new(vec![
            RosterEntry {
                email: "dup@x.com".to_string(),
                name: "First".to_string(),
                class_name: "6".to_string(),
            },
            RosterEntry {
                email: "DUP@X.COM".to_string(),
                name: "Second".to_string(),
                class_name: "7".to_string(),
            },
        ]);
        assert_eq!(roster.find_by_email("dup@x.com").unwrap().name, "First");
    }

    #[test]
    fn test_lookup_does_not_mutate() {
        let roster = sample_roster();
        let before: Vec<RosterEntry> = roster.entries().to_vec();
        let _ = roster.find_by_email("a@x.com");
        assert_eq!(roster.entries(), before.as_slice());
    }
}
