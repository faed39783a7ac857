//! 单文件风格检查（制表符 + 末尾换行）
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

use crate::errors::CheckError;
use crate::options::CheckOptions;
use crate::types::{Violation, ViolationKind};

/// 扫描已解码的文本内容
/// - 行号从 1 开始；`\n`、`\r\n` 与单独的 `\r` 都视为一次换行
/// - 换行恰为最后一个字符时，记录一条 TrailingNewline（行号为换行所在行）
/// - 每个制表符记录一条 Tab
///
/// 返回的违规按出现顺序排列；`path` 仅用于填充结果。
pub fn check_content(path: &Path, content: &str, opts: &CheckOptions) -> Vec<Violation> {
    let mut violations = Vec::new();
    let mut line = 1usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            // `\r\n` 由后面的 `\n` 处理
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                if opts.trailing_newline && chars.peek().is_none() {
                    violations.push(Violation { path: path.to_path_buf(), line, kind: ViolationKind::TrailingNewline });
                }
                line += 1;
            }
            '\t' if opts.tabs => {
                violations.push(Violation { path: path.to_path_buf(), line, kind: ViolationKind::Tab });
            }
            _ => {}
        }
    }

    violations
}

/// 读取并检查单个文件
/// - 整读字节后以 `from_utf8_lossy` 有损解码，非法字节替换为 U+FFFD，不报错
/// - 打开/读取失败返回 `CheckError::Read`，由调用方决定终止
pub fn check_file(path: &Path, opts: &CheckOptions) -> Result<Vec<Violation>, CheckError> {
    let read_err = |source| CheckError::Read { path: path.to_path_buf(), source };

    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf).map_err(read_err)?;

    let content = String::from_utf8_lossy(&buf);
    let violations = check_content(path, &content, opts);
    debug!(path = %path.display(), bytes = buf.len(), violations = violations.len(), "checked file");
    Ok(violations)
}
