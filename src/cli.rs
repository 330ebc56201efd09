//! CLI 参数定义

use clap::Parser;

/// pathfix - 用登录 shell 的 PATH 修复当前进程的 PATH
#[derive(Parser, Debug)]
#[command(
    name = "pathfix",
    version,
    about = "用登录 shell 的 PATH 修复当前进程的 PATH",
    long_about = "以交互登录模式运行 $SHELL -ilc env，读取其中的 PATH 并合并到当前进程，打印修复前后的值"
)]
pub struct Cli {
    /// 只计算结果，不写回 PATH
    #[arg(long)]
    pub dry_run: bool,

    /// 输出格式 (env/json)
    #[arg(short, long, default_value = "env")]
    pub format: String,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,
}
