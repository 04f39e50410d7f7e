//! 核心抽象：语义命令与按键事件

pub mod command;
pub mod event;

pub use command::Command;
pub use event::{parse_key, Key};
