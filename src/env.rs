//! 环境变量访问接口
//!
//! 进程环境是全局可变状态，这里把读写收拢到 `EnvAccess` 之后：
//! - `ProcessEnv`: 读写真实的进程环境
//! - `MemoryEnv`: 内存中的环境表，供测试或嵌入方注入
//!
//! 值按 `OsString` 处理：POSIX 上 PATH 可以包含非 UTF-8 字节。

use std::collections::HashMap;
use std::env;
use std::ffi::{OsStr, OsString};

/// 环境变量读写接口
pub trait EnvAccess {
    /// 读取原始值，未设置时返回 None
    fn var_os(&self, key: &str) -> Option<OsString>;

    /// 写入变量
    fn set_var(&mut self, key: &str, value: &OsStr);

    /// 读取 UTF-8 值，未设置或非 UTF-8 时返回 None
    fn var(&self, key: &str) -> Option<String> {
        self.var_os(key).and_then(|v| v.into_string().ok())
    }
}

/// 当前进程的真实环境
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvAccess for ProcessEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        env::var_os(key)
    }

    fn set_var(&mut self, key: &str, value: &OsStr) {
        // 只应在启动阶段、其他线程读取环境之前调用
        unsafe {
            env::set_var(key, value);
        }
    }
}

/// 内存环境表
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: HashMap<String, OsString>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// 链式设置变量
    pub fn with(mut self, key: &str, value: impl AsRef<OsStr>) -> Self {
        self.vars.insert(key.to_string(), value.as_ref().to_os_string());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<OsString> {
        self.vars.remove(key)
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<OsString>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvAccess for MemoryEnv {
    fn var_os(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &OsStr) {
        self.vars.insert(key.to_string(), value.to_os_string());
    }
}

/// `OsStr` 转字节：Unix 上无损，其他平台按 UTF-8 有损转换
#[cfg(unix)]
pub fn os_to_bytes(value: &OsStr) -> Vec<u8> {
    use std::os::unix::ffi::OsStrExt;
    value.as_bytes().to_vec()
}

#[cfg(not(unix))]
pub fn os_to_bytes(value: &OsStr) -> Vec<u8> {
    value.to_string_lossy().into_owned().into_bytes()
}

/// 字节转 `OsString`，与 `os_to_bytes` 对应
#[cfg(unix)]
pub fn bytes_to_os(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
pub fn bytes_to_os(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
