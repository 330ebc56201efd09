//! 错误处理模块 (明确抛出异常，库本身从不打印或退出)

use std::error::Error;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathFixError {
    #[error("无法获取默认 shell: 未设置 SHELL 环境变量")]
    MissingShell,

    #[error("启动 shell 失败 ({shell}): {source}")]
    ShellSpawn {
        shell: String,
        #[source]
        source: std::io::Error,
    },

    #[error("shell 执行失败 ({shell}): {status}{}", stderr_suffix(.stderr))]
    ShellExit {
        shell: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" - {}", trimmed)
    }
}

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 配置缺失（SHELL 未设置）
    Configuration,
    /// shell 无法启动或退出失败
    ShellExecution,
}

impl PathFixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PathFixError::MissingShell => ErrorKind::Configuration,
            PathFixError::ShellSpawn { .. } | PathFixError::ShellExit { .. } => {
                ErrorKind::ShellExecution
            }
        }
    }

    /// 报告错误，支持详细/安静模式
    /// verbose = true: 详细错误链
    /// verbose = false: 关键信息
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);

            let mut current = self.source();
            let mut depth = 0;
            while let Some(err) = current {
                let indent = "   ".repeat(depth);
                eprintln!("  {}└─ 原因: {}", indent, err);
                current = err.source();
                depth += 1;
            }
        } else {
            match self {
                PathFixError::MissingShell => eprintln!("未设置 SHELL"),
                PathFixError::ShellSpawn { shell, .. } => eprintln!("无法启动 shell: {}", shell),
                PathFixError::ShellExit { shell, status, .. } => {
                    eprintln!("shell 退出失败: {} ({})", shell, status)
                }
            }
        }
    }
}

/// 简化 Result 类型别名
pub type Result<T> = std::result::Result<T, PathFixError>;
