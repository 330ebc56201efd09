//! pathfix 演示程序
//!
//! 打印修复前后的 PATH：
//! - 成功静默，只输出 PATH
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

mod cli;

use clap::Parser;
use cli::Cli;
use pathfix::Result;
use pathfix::env::EnvAccess;
use pathfix::fixer::{PATH_VAR, PathFixer, SHELL_VAR};
use pathfix::shell::ShellRunner;
use pathfix::types::{Config, FixReport, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    let config = init_config(&cli);
    init_tracing(config.verbose);

    let mut fixer = PathFixer::system();
    let report = match run(&mut fixer, &config) {
        Ok(report) => report,
        Err(e) => {
            e.report(config.verbose);
            std::process::exit(1);
        }
    };

    match config.format {
        OutputFormat::ENV => {
            println!("修复前: {}", report.before.as_deref().unwrap_or_default());
            println!("修复后: {}", report.after.as_deref().unwrap_or_default());
        }
        OutputFormat::JSON => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("JSON 序列化失败: {}", e);
                std::process::exit(1);
            }
        },
    }
}

/// 初始化配置
fn init_config(cli: &Cli) -> Config {
    Config {
        verbose: cli.verbose,
        dry_run: cli.dry_run,
        format: OutputFormat::from(cli.format.as_str()),
    }
}

/// 日志写到 stderr；RUST_LOG 优先，其次按 --verbose 选择级别
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 执行修复并生成报告
fn run<E: EnvAccess, R: ShellRunner>(
    fixer: &mut PathFixer<E, R>,
    config: &Config,
) -> Result<FixReport> {
    // 仅用于展示，非 UTF-8 字节按有损方式显示
    let display = |key: &str| {
        fixer
            .env()
            .var_os(key)
            .map(|v| v.to_string_lossy().into_owned())
    };
    let before = display(PATH_VAR);
    let shell = display(SHELL_VAR);

    let outcome = if config.dry_run {
        fixer.plan()?
    } else {
        fixer.fix()?
    };

    let after = match outcome.new_path() {
        Some(path) => Some(path.to_string()),
        None => before.clone(),
    };

    Ok(FixReport {
        shell,
        dry_run: config.dry_run,
        before,
        after,
        outcome,
    })
}
