//! 测试工具模块
//!
//! 提供统一的测试环境管理，避免环境变量污染

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};
use tempfile::TempDir;

/// 环境变量守卫 - 释放时恢复
///
/// 使用 `vars_os`，非 UTF-8 的值也能保存和恢复
pub struct EnvGuard {
    original_vars: HashMap<OsString, OsString>,
}

impl Default for EnvGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvGuard {
    /// 记录当前环境变量
    pub fn new() -> Self {
        let original_vars: HashMap<OsString, OsString> = env::vars_os().collect();
        Self { original_vars }
    }

    /// 设置测试环境变量（自动包装为 unsafe）
    pub fn set_var(&self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) {
        unsafe {
            env::set_var(key, value);
        }
    }

    /// 移除环境变量（自动包装为 unsafe）
    pub fn remove_var(&self, key: impl AsRef<OsStr>) {
        unsafe {
            env::remove_var(key);
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // 先移除新增的变量
        let current_vars: Vec<OsString> = env::vars_os().map(|(k, _)| k).collect();
        for key in current_vars {
            if !self.original_vars.contains_key(&key) {
                self.remove_var(&key);
            }
        }

        // 再恢复原始值
        for (key, value) in &self.original_vars {
            if env::var_os(key).as_ref() != Some(value) {
                self.set_var(key, value);
            }
        }
    }
}

/// 在临时目录中写一个可执行的假 shell 脚本
///
/// 返回的 TempDir 必须保持存活，脚本才存在。
#[cfg(unix)]
pub fn fake_shell(body: &str) -> (TempDir, String) {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake-shell");
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

    let shell = path.to_string_lossy().into_owned();
    (dir, shell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_cleanup() {
        {
            let guard = EnvGuard::new();
            guard.set_var("PATHFIX_CLEANUP_VAR", "cleanup_test");
            assert_eq!(env::var("PATHFIX_CLEANUP_VAR").unwrap(), "cleanup_test");
        }
        assert!(env::var("PATHFIX_CLEANUP_VAR").is_err());
    }

    #[test]
    #[serial]
    fn test_env_guard_restores_removed() {
        let original = env::var("PATH").ok();
        {
            let guard = EnvGuard::new();
            guard.remove_var("PATH");
            assert!(env::var("PATH").is_err());
        }
        assert_eq!(env::var("PATH").ok(), original);
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_fake_shell_is_executable() {
        let (_dir, shell) = fake_shell("echo hi\n");
        let out = std::process::Command::new(&shell).output().unwrap();
        assert_eq!(String::from_utf8_lossy(&out.stdout), "hi\n");
    }
}
