//! 检查主流程：遍历 → 逐文件检查 → 汇总
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::checker::check_file;
use crate::options::{CheckOptions, CheckStats};
use crate::types::ReportItem;
use crate::walk::collect_targets;

/// 检查所有根目录并将诊断与汇总写入 `out`
///
/// 输出格式（逐行）：
/// - `Validating style`
/// - 每条违规一行：`ERROR: <kind> detected at <path> Line number: <n>`
/// - `------` / `Checked <n> files` / `Errors detected: <n>` / `Validation PASSED|FAILED`
///
/// 若提供 `report`，违规会同时以 JSON 数组流式写入（按检查顺序）。
/// `exclude` 中的文件不参与检查（报告文件位于被检查目录内时需传入）。
/// 任一文件读取失败即返回错误，不输出汇总。
pub fn check_roots(
    roots: &[PathBuf],
    exclude: &[PathBuf],
    out: &mut dyn Write,
    report: Option<&mut dyn Write>,
    opts: &CheckOptions,
) -> Result<CheckStats> {
    writeln!(out, "Validating style")?;

    let files = collect_targets(roots, exclude);
    info!(roots = roots.len(), files = files.len(), "collected files");

    check_targets(&files, out, report, opts)
}

fn check_targets(
    files: &[PathBuf],
    out: &mut dyn Write,
    mut report: Option<&mut dyn Write>,
    opts: &CheckOptions,
) -> Result<CheckStats> {
    let mut stats = CheckStats::default();
    let mut first = true;
    if let Some(r) = report.as_mut() {
        write!(r, "[")?;
    }

    for path in files {
        let violations = check_file(path, opts).with_context(|| format!("check {}", path.display()))?;
        stats.files_checked += 1;
        stats.violations += violations.len();

        for v in &violations {
            writeln!(out, "{v}")?;
            if let Some(r) = report.as_mut() {
                if !first { write!(r, ",")?; } else { first = false; }
                serde_json::to_writer(&mut **r, &ReportItem::from(v))?;
            }
        }
    }

    if let Some(r) = report.as_mut() {
        write!(r, "]")?;
    }

    writeln!(out, "------")?;
    writeln!(out, "Checked {} files", stats.files_checked)?;
    writeln!(out, "Errors detected: {}", stats.violations)?;
    if stats.passed() {
        writeln!(out, "Validation PASSED")?;
    } else {
        writeln!(out, "Validation FAILED")?;
    }

    Ok(stats)
}
