//! PATH 修复器
//!
//! 流程：读取 SHELL → 启动登录 shell → 解析输出 → 去重合并 → 写回 PATH

use crate::env::{self, EnvAccess, ProcessEnv};
use crate::error::{PathFixError, Result};
use crate::path_list::{self, PATH_LIST_SEPARATOR};
use crate::shell::{LoginShell, ShellRunner};
use serde::Serialize;
use std::ffi::OsString;
use tracing::{debug, info};

pub const SHELL_VAR: &str = "SHELL";
pub const PATH_VAR: &str = "PATH";

/// 一次修复的结果
///
/// 路径以有损 UTF-8 形式记录，仅用于展示；写回环境的是原始字节。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FixOutcome {
    /// 当前平台无需修复
    Skipped,
    /// shell 输出中没有 PATH，或 PATH 为空
    NoPathReported,
    /// 没有需要追加的路径段
    Unchanged { path: String },
    /// PATH 被（或将被）更新
    Updated {
        previous: String,
        path: String,
        added: Vec<String>,
    },
}

impl FixOutcome {
    /// 修复后的 PATH；未产生新值时返回 None
    pub fn new_path(&self) -> Option<&str> {
        match self {
            FixOutcome::Updated { path, .. } => Some(path),
            _ => None,
        }
    }
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// PATH 修复器
pub struct PathFixer<E, R> {
    env: E,
    runner: R,
    skip_platform: bool,
}

impl PathFixer<ProcessEnv, LoginShell> {
    /// 使用真实进程环境和登录 shell
    pub fn system() -> Self {
        Self::new(ProcessEnv, LoginShell)
    }
}

impl<E: EnvAccess, R: ShellRunner> PathFixer<E, R> {
    pub fn new(env: E, runner: R) -> Self {
        Self {
            env,
            runner,
            // Windows 下 GUI 启动的进程本来就继承了正确的 PATH
            skip_platform: cfg!(windows),
        }
    }

    /// 覆盖平台判断
    pub fn with_platform_skip(mut self, skip: bool) -> Self {
        self.skip_platform = skip;
        self
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn into_env(self) -> E {
        self.env
    }

    /// 读取 SHELL，未设置或为空白时报错
    pub fn shell(&self) -> Result<OsString> {
        self.env
            .var_os(SHELL_VAR)
            .filter(|s| !env::os_to_bytes(s).iter().all(u8::is_ascii_whitespace))
            .ok_or(PathFixError::MissingShell)
    }

    /// 计算修复结果，不写回环境
    pub fn plan(&self) -> Result<FixOutcome> {
        self.resolve().map(|(outcome, _)| outcome)
    }

    /// 修复当前进程的 PATH
    ///
    /// 失败时不会修改 PATH；重复调用不会累积重复路径。
    pub fn fix(&mut self) -> Result<FixOutcome> {
        let (outcome, new_path) = self.resolve()?;

        if let Some(path) = new_path {
            info!(outcome = ?outcome, "更新 PATH");
            self.env.set_var(PATH_VAR, &path);
        }

        Ok(outcome)
    }

    /// 返回结果以及需要写回的原始 PATH
    fn resolve(&self) -> Result<(FixOutcome, Option<OsString>)> {
        if self.skip_platform {
            debug!("当前平台跳过 PATH 修复");
            return Ok((FixOutcome::Skipped, None));
        }

        let shell = self.shell()?;
        let dump = self.runner.capture_env(&shell)?;

        let discovered = match path_list::find_var(&dump, PATH_VAR.as_bytes()) {
            Some(value) if !value.is_empty() => value,
            _ => {
                debug!(shell = %shell.to_string_lossy(), "shell 未报告 PATH");
                return Ok((FixOutcome::NoPathReported, None));
            }
        };
        debug!(
            shell = %shell.to_string_lossy(),
            discovered = %lossy(discovered),
            "从登录 shell 读取到 PATH"
        );

        // 未设置视为空；非 UTF-8 的值按原始字节参与合并
        let current = self
            .env
            .var_os(PATH_VAR)
            .map(|v| env::os_to_bytes(&v))
            .unwrap_or_default();
        let merged = path_list::merge(&current, discovered, PATH_LIST_SEPARATOR);

        if !merged.is_changed() {
            return Ok((
                FixOutcome::Unchanged {
                    path: lossy(&current),
                },
                None,
            ));
        }

        let outcome = FixOutcome::Updated {
            previous: lossy(&current),
            path: lossy(&merged.path),
            added: merged.added.iter().map(|s| lossy(s)).collect(),
        };
        Ok((outcome, Some(env::bytes_to_os(merged.path))))
    }
}

/// 把登录 shell 的 PATH 合并进当前进程
///
/// 应在程序启动时、其他线程读取环境之前调用。
pub fn fix() -> Result<FixOutcome> {
    PathFixer::system().fix()
}
