//! 动作：宿主输入归一化后的唯一入口
//!
//! 带时间语义的动作携带 `now`，内核不自己读时钟。

use std::time::Instant;

use compact_str::CompactString;

use crate::core::Command;

#[derive(Debug, Clone)]
pub enum Action {
    /// 执行一条语义命令（按键经 Keymap 翻译后到达这里）
    RunCommand(Command),
    /// 点击目录或分页器跳转到指定节
    NavigateTo { section: usize },
    /// 宿主报告 URL 锚点变化（含初始加载）
    HashChanged { hash: String },
    /// 搜索框内容变化
    SearchInputChanged { text: String, now: Instant },
    /// 回车立即提交搜索，跳过防抖
    SearchSubmit { now: Instant },
    /// 展开/收起可折叠块
    ToggleBlock { id: CompactString },
    /// 周期心跳：驱动防抖触发与通知过期
    Tick { now: Instant },
}
