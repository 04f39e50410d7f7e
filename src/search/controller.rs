//! 搜索控制器：宿主调用的薄入口
//!
//! 流程固定：无条件 clear → 空词短路 → matcher → highlighter →
//! 返回文档序首个匹配。匹配与否都不是错误；引擎在两个状态之间
//! 迁移：Idle（无高亮）与 Highlighted（高亮与最近一次检索词一致）。

use crate::content::{node, Document, NodePath};

use super::{highlighter, matcher::Matcher, restorer};

/// 文档序首个匹配的位置：节下标 + 节内高亮标记的定位路径
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub section_index: usize,
    pub locator: NodePath,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub first: Option<MatchResult>,
    /// 全文档匹配总数，供通知组件使用
    pub total: usize,
}

impl SearchOutcome {
    fn absent() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.first.is_some()
    }
}

pub fn search(document: &mut Document, term: &str) -> SearchOutcome {
    // 先清掉上一次搜索的全部痕迹，再决定要不要搜
    restorer::clear(document);

    let term = term.trim();
    if term.is_empty() || document.is_empty() {
        return SearchOutcome::absent();
    }

    let matcher = match Matcher::new(term) {
        Ok(matcher) => matcher,
        Err(e) => {
            // 转义后按理构造不会失败；万一失败按「无结果」处理
            tracing::warn!(term, error = %e, "search pattern rejected");
            return SearchOutcome::absent();
        }
    };

    let spans = matcher.find(document);
    if spans.is_empty() {
        return SearchOutcome::absent();
    }

    let total = spans.len();
    highlighter::apply(document, &spans);

    let first = document.sections.iter().enumerate().find_map(|(i, s)| {
        node::highlight_paths(&s.body)
            .into_iter()
            .next()
            .map(|locator| MatchResult {
                section_index: i,
                locator,
            })
    });

    SearchOutcome { first, total }
}

pub fn clear(document: &mut Document) {
    restorer::clear(document);
}
