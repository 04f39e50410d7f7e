//! 章节导航的纯函数：越界钳制、进度、URL 锚点

use compact_str::{format_compact, CompactString};

/// 目标下标钳制到 `[0, len)`；空文档返回 None
pub fn clamp_section(target: usize, len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(target.min(len - 1))
    }
}

/// 阅读进度百分比，按「当前节 / 总节数」计
pub fn progress_percent(current: usize, len: usize) -> f32 {
    if len == 0 {
        return 0.0;
    }
    (current + 1) as f32 / len as f32 * 100.0
}

pub fn section_hash(id: &str) -> CompactString {
    format_compact!("#{id}")
}

/// 从 URL 锚点取节 id；非锚点形式返回 None
pub fn parse_hash(hash: &str) -> Option<&str> {
    let id = hash.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
