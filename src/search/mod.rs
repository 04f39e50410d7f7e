//! 站内搜索引擎
//!
//! 依赖顺序：matcher（纯文本匹配）→ highlighter（就地包裹高亮标记）
//! → restorer（撤销高亮）→ controller（宿主调用的薄入口）。
//! 引擎本身无状态：每次调用都显式接收文档，调用之间不保留任何东西。

pub mod controller;
pub mod highlighter;
pub mod matcher;
pub mod restorer;

pub use controller::{MatchResult, SearchOutcome};
pub use matcher::{Matcher, TextSpan};

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug)]
pub enum SearchError {
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidPattern(e) => write!(f, "invalid search pattern: {}", e),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<regex::Error> for SearchError {
    fn from(e: regex::Error) -> Self {
        SearchError::InvalidPattern(e)
    }
}
