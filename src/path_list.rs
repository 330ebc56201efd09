//! PATH 列表处理
//!
//! - 从 `env` 输出中提取变量值
//! - 按平台分隔符拆分、去重
//! - 把新路径段追加到现有 PATH
//!
//! 全部按字节处理，非 UTF-8 的路径原样保留。

/// 平台 PATH 列表分隔符
pub const PATH_LIST_SEPARATOR: u8 = if cfg!(windows) { b';' } else { b':' };

/// 在 `KEY=VALUE` 行中查找第一个匹配的变量值
///
/// 只以第一个 `=` 为界，值本身可以包含 `=`。
/// 含换行的值不在支持范围内。
pub fn find_var<'a>(dump: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    dump.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter_map(|line| {
            let eq = line.iter().position(|&b| b == b'=')?;
            Some((&line[..eq], &line[eq + 1..]))
        })
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

/// 拆分 PATH 字符串：丢弃空段，保留首次出现的顺序
pub fn split_unique(path: &[u8], separator: u8) -> Vec<&[u8]> {
    let mut segments: Vec<&[u8]> = Vec::new();
    for segment in path.split(|&b| b == separator) {
        if !segment.is_empty() && !segments.contains(&segment) {
            segments.push(segment);
        }
    }
    segments
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

fn is_blank(value: &[u8]) -> bool {
    value.iter().all(u8::is_ascii_whitespace)
}

/// 合并结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Merged {
    /// 合并后的完整 PATH
    pub path: Vec<u8>,
    /// 实际追加的路径段
    pub added: Vec<Vec<u8>>,
}

impl Merged {
    pub fn is_changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// 把 `discovered` 中尚未出现在 `current` 里的路径段追加到末尾
///
/// 现有 PATH 为空白时直接使用去重后的新值，不带前导分隔符。
/// 没有可追加的段时 `path` 与 `current` 相同。
pub fn merge(current: &[u8], discovered: &[u8], separator: u8) -> Merged {
    let segments = split_unique(discovered, separator);

    if is_blank(current) && !segments.is_empty() {
        return Merged {
            path: segments.join(&separator),
            added: segments.into_iter().map(<[u8]>::to_vec).collect(),
        };
    }

    let mut path = current.to_vec();
    let mut added = Vec::new();
    for segment in segments {
        // 子串判断：已包含的段（包括作为更长路径一部分出现的）不再追加
        if !contains(current, segment) {
            path.push(separator);
            path.extend_from_slice(segment);
            added.push(segment.to_vec());
        }
    }

    Merged { path, added }
}
