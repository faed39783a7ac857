//! 公共类型（对外暴露）
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

/// 违规类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    Tab,
    TrailingNewline,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Tab => f.write_str("Tab"),
            ViolationKind::TrailingNewline => f.write_str("Trailing newline"),
        }
    }
}

/// 单条违规：文件路径 + 行号（1 起始）+ 类别
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: PathBuf,
    pub line: usize,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: {} detected at {} Line number: {}", self.kind, self.path.display(), self.line)
    }
}

/// 报告项结构（对应 JSON 报告的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct ReportItem<'a> {
    pub path: Cow<'a, str>,
    pub line: usize,
    pub kind: ViolationKind,
}

impl<'a> From<&'a Violation> for ReportItem<'a> {
    fn from(v: &'a Violation) -> Self {
        Self { path: v.path.to_string_lossy(), line: v.line, kind: v.kind }
    }
}
