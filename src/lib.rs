//! pathfix - 修复 GUI 启动进程的 PATH
//!
//! 从桌面启动的程序拿不到用户在终端 shell 里配置的 PATH。
//! 本库以交互登录模式运行 `$SHELL -ilc env`，取出其中的 PATH，
//! 把当前进程缺少的路径段追加到 PATH 末尾。
//!
//! ```no_run
//! if let Err(e) = pathfix::fix() {
//!     eprintln!("{}", e);
//! }
//! ```

// 错误类型
pub mod error;

// 环境变量读写
pub mod env;

// 登录 shell 执行
pub mod shell;

// PATH 解析与合并
pub mod path_list;

// 修复流程
pub mod fixer;

// 数据结构
pub mod types;

#[cfg(test)]
pub mod test_utils;

// 重新导出常用类型
pub use env::{EnvAccess, MemoryEnv, ProcessEnv};
pub use error::{ErrorKind, PathFixError, Result};
pub use fixer::{FixOutcome, PathFixer, fix};
pub use path_list::PATH_LIST_SEPARATOR;
pub use shell::{LoginShell, ShellRunner};
