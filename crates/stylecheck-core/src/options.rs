//! 检查选项、内置目录预设与统计信息
use std::path::PathBuf;

/// 内置的根目录预设
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// 示例与实现测试目录：`examples` + `implementation/tests`
    #[default]
    Examples,
    /// 早期工具使用的目录：`snippets` + `test`
    Legacy,
}

impl Preset {
    /// 预设对应的根目录列表（相对当前工作目录）
    pub fn roots(self) -> Vec<PathBuf> {
        let names: &[&str] = match self {
            Preset::Examples => &["examples", "implementation/tests"],
            Preset::Legacy => &["snippets", "test"],
        };
        names.iter().map(PathBuf::from).collect()
    }
}

/// 检查选项：两类检查可独立开关，默认全部启用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOptions {
    /// 检查制表符
    pub tabs: bool,
    /// 检查文件末尾换行
    pub trailing_newline: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self { tabs: true, trailing_newline: true }
    }
}

/// 检查统计信息（便于 CLI 打印与计算退出码）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckStats {
    pub files_checked: usize,
    pub violations: usize,
}

impl CheckStats {
    pub fn passed(&self) -> bool {
        self.violations == 0
    }

    /// 进程退出码：违规总数，饱和到 255（8 位退出码回绕后可能被误判为成功）
    pub fn exit_code(&self) -> u8 {
        u8::try_from(self.violations).unwrap_or(u8::MAX)
    }
}
