//! 核心数据结构定义

use crate::fixer::FixOutcome;
use serde::Serialize;

/// 配置选项 (支持详细/安静模式切换)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub verbose: bool,
    pub dry_run: bool,
    pub format: OutputFormat,
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    ENV,
    JSON,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::JSON,
            _ => OutputFormat::ENV,
        }
    }
}

/// 修复报告 (json 输出)
#[derive(Debug, Clone, Serialize)]
pub struct FixReport {
    pub shell: Option<String>,
    pub dry_run: bool,
    pub before: Option<String>,
    pub after: Option<String>,
    pub outcome: FixOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from("json"), OutputFormat::JSON);
        assert_eq!(OutputFormat::from("J"), OutputFormat::JSON);
        assert_eq!(OutputFormat::from("env"), OutputFormat::ENV);
        assert_eq!(OutputFormat::from("whatever"), OutputFormat::ENV);
    }

    #[test]
    fn test_report_json_shape() {
        let report = FixReport {
            shell: Some("/bin/zsh".to_string()),
            dry_run: true,
            before: Some("/a".to_string()),
            after: Some("/a:/b".to_string()),
            outcome: FixOutcome::Updated {
                previous: "/a".to_string(),
                path: "/a:/b".to_string(),
                added: vec!["/b".to_string()],
            },
        };

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["shell"], "/bin/zsh");
        assert_eq!(json["dry_run"], true);
        assert_eq!(json["outcome"]["status"], "updated");
    }
}
