//! temario - 分页教学内容阅读器核心库
//!
//! 模块结构：
//! - content: 内容模型（Document, Section, Node）
//! - search: 站内搜索引擎（Matcher, Highlighter, Restorer, Controller）
//! - core: 核心框架（Command, Key）
//! - kernel: 无界面应用核心（state/action/effect/store）
//! - services: 服务层（ConfigService）

pub mod content;
pub mod core;
pub mod kernel;
pub mod logging;
pub mod search;
pub mod services;
