use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use stylecheck_core::{check_roots, CheckOptions, Preset};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "stylecheck", version, about = "检查目录中的制表符与文件末尾换行")]
struct Cli {
    /// 要检查的根目录；提供时替换预设中的目录
    roots: Vec<PathBuf>,

    /// 内置目录预设
    #[arg(long, value_enum, default_value_t = PresetArg::Examples)]
    preset: PresetArg,

    /// 关闭制表符检查
    #[arg(long)]
    no_tabs: bool,

    /// 关闭文件末尾换行检查
    #[arg(long)]
    no_trailing_newline: bool,

    /// 额外输出 JSON 报告（违规数组）
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PresetArg {
    /// examples + implementation/tests
    Examples,
    /// snippets + test
    Legacy,
}

impl From<PresetArg> for Preset {
    fn from(p: PresetArg) -> Self {
        match p {
            PresetArg::Examples => Preset::Examples,
            PresetArg::Legacy => Preset::Legacy,
        }
    }
}

fn main() -> Result<ExitCode> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    let roots = if cli.roots.is_empty() { Preset::from(cli.preset).roots() } else { cli.roots };
    let opts = CheckOptions { tabs: !cli.no_tabs, trailing_newline: !cli.no_trailing_newline };
    info!(?roots, ?opts, "starting style check");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let stats = match &cli.report {
        Some(path) => {
            // 以缓冲方式打开报告文件，按 JSON 数组流式写入
            let mut report = BufWriter::new(File::create(path).context("create report file")?);
            // 报告文件可能位于被检查目录内，不检查自身
            let exclude = [path.clone()];
            let stats = check_roots(&roots, &exclude, &mut out, Some(&mut report), &opts)?;
            report.flush().context("flush report file")?;
            stats
        }
        None => check_roots(&roots, &[], &mut out, None, &opts)?,
    };
    out.flush().ok();

    info!(files_checked = stats.files_checked, violations = stats.violations, "style check finished");
    Ok(ExitCode::from(stats.exit_code()))
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，stdout 只保留诊断与汇总；默认等级 warn
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).with_writer(io::stderr).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
