//! 命令系统：语义命令定义
//!
//! Command 是与具体按键解耦的语义命令枚举；
//! 名字是稳定的，配置文件里用名字引用命令。

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 章节导航 ====================
    NextSection,
    PrevSection,
    FirstSection,
    LastSection,

    // ==================== 搜索 ====================
    ClearSearch,
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::NextSection => "nextSection",
            Command::PrevSection => "prevSection",
            Command::FirstSection => "firstSection",
            Command::LastSection => "lastSection",
            Command::ClearSearch => "clearSearch",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        match name {
            "nextSection" => Some(Command::NextSection),
            "prevSection" => Some(Command::PrevSection),
            "firstSection" => Some(Command::FirstSection),
            "lastSection" => Some(Command::LastSection),
            "clearSearch" => Some(Command::ClearSearch),
            _ => None,
        }
    }
}
