//! 目录遍历：收集待检查文件
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// 递归收集每个根目录下的全部普通文件
/// - 不按扩展名或文件名过滤
/// - 按根目录顺序输出；目录内按文件名排序，保证输出顺序可复现
/// - 根目录不存在时跳过（记录 warn）；遍历中的单个条目错误同样跳过
/// - 指向普通文件的符号链接视为文件，不跟随目录链接；悬空链接跳过（记录 debug）
/// - `exclude` 中的路径按规范化路径比较后剔除（如本次运行写出的报告文件）
pub fn collect_targets(roots: &[PathBuf], exclude: &[PathBuf]) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = Vec::new();
    // 尚不存在的排除项无法规范化，忽略
    let excluded: Vec<PathBuf> = exclude.iter().filter_map(|p| p.canonicalize().ok()).collect();

    for root in roots {
        if !root.exists() {
            warn!(root = %root.display(), "root directory does not exist, skipping");
            continue;
        }
        let before = files.len();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    warn!(root = %root.display(), error = %err, "walk error, skipping entry");
                    continue;
                }
            };
            if entry.path_is_symlink() && !entry.path().exists() {
                debug!(path = %entry.path().display(), "dangling symlink, skipping");
                continue;
            }
            let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }
            if is_excluded(entry.path(), &excluded) {
                debug!(path = %entry.path().display(), "excluded path, skipping");
                continue;
            }
            files.push(entry.into_path());
        }
        debug!(root = %root.display(), files = files.len() - before, "collected targets");
    }

    files
}

fn is_excluded(path: &Path, excluded: &[PathBuf]) -> bool {
    if excluded.is_empty() { return false; }
    path.canonicalize().map(|p| excluded.contains(&p)).unwrap_or(false)
}
