//! 登录 shell 执行器
//!
//! 以交互 + 登录模式启动用户 shell 并执行 `env`，
//! 用户自定义的 PATH 通常写在只有这种模式才会加载的启动文件里。

use crate::error::{PathFixError, Result};
use std::ffi::OsStr;
use std::process::{Command, Stdio};
use tracing::debug;

/// 传给 shell 的参数：interactive, login, command
pub const SHELL_ARGS: [&str; 2] = ["-ilc", "env"];

/// 运行 shell 并返回其环境输出
pub trait ShellRunner {
    /// 执行 `<shell> -ilc env`，返回标准输出的原始字节
    fn capture_env(&self, shell: &OsStr) -> Result<Vec<u8>>;
}

/// 真实的登录 shell
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginShell;

impl ShellRunner for LoginShell {
    fn capture_env(&self, shell: &OsStr) -> Result<Vec<u8>> {
        debug!(shell = %shell.to_string_lossy(), args = ?SHELL_ARGS, "启动登录 shell");

        // output() 在等待退出的同时读取管道，不会因缓冲区写满而死锁
        let output = Command::new(shell)
            .args(SHELL_ARGS)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| PathFixError::ShellSpawn {
                shell: shell.to_string_lossy().into_owned(),
                source,
            })?;

        if !output.status.success() {
            return Err(PathFixError::ShellExit {
                shell: shell.to_string_lossy().into_owned(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        debug!(bytes = output.stdout.len(), "shell 输出已读取");
        Ok(output.stdout)
    }
}
