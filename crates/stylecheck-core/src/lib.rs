//! 代码风格检查库
//!
//! 设计要点：
//! - 按根目录递归收集全部普通文件（不按扩展名过滤）。
//! - 单文件整读，按 UTF-8 有损解码，逐字符扫描并维护 1 起始的行号。
//! - 两类违规：制表符（Tab）与文件末尾换行（TrailingNewline），可分别开关。
//! - 每个文件独立、无状态扫描；计数由调用方累加，不使用全局状态。

mod options;
mod types;
mod errors;
mod checker;
mod walk;
mod scan;

pub use options::{CheckOptions, CheckStats, Preset};
pub use types::{ReportItem, Violation, ViolationKind};
pub use errors::CheckError;
pub use checker::{check_content, check_file};
pub use walk::collect_targets;
pub use scan::check_roots;
