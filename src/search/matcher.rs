//! 匹配器：在文档中定位检索词的所有出现位置
//!
//! 大小写不敏感的字面子串匹配。检索词先经 `regex::escape` 转义，
//! 用户输入的 `.`、`*` 等只匹配其本身。匹配以单个文本叶子为单位，
//! 不跨越元素边界（被标记切开的词匹配不到，这是文档化的限制）。

use regex::{Regex, RegexBuilder};

use super::Result;
use crate::content::{node, Document, NodePath};

/// 指向某节内一个文本叶子中的一段匹配（字节偏移）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub section: usize,
    pub path: NodePath,
    pub start: usize,
    pub end: usize,
}

pub struct Matcher {
    regex: Regex,
}

impl Matcher {
    pub fn new(term: &str) -> Result<Self> {
        let pattern = regex::escape(term);
        let regex = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { regex })
    }

    fn is_empty(&self) -> bool {
        self.regex.as_str().is_empty()
    }

    /// 按文档序返回所有匹配：先节序，节内按叶子序与偏移序
    pub fn find(&self, document: &Document) -> Vec<TextSpan> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut spans = Vec::new();
        for (section, s) in document.sections.iter().enumerate() {
            for (path, text) in node::walk_text(&s.body) {
                for m in self.regex.find_iter(text) {
                    spans.push(TextSpan {
                        section,
                        path: path.clone(),
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }
        spans
    }
}
