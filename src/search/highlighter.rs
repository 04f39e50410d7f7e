//! 高亮器：把匹配片段就地包裹进高亮标记
//!
//! 每个被命中的文本叶子被拆成至多「前段 / 匹配 / 后段」三类部分，
//! 匹配部分包进 `ElementKind::Highlight` 元素，前后段保持为纯文本
//! 兄弟节点。只改写单个叶子，从不切开元素，也不产生空文本节点。

use crate::content::{node, Document, Node, NodePath};

use super::matcher::TextSpan;

pub fn apply(document: &mut Document, spans: &[TextSpan]) {
    // 按叶子分组；matcher 产出即为文档序，组内偏移升序
    let mut groups: Vec<(usize, NodePath, Vec<(usize, usize)>)> = Vec::new();
    for span in spans {
        match groups.last_mut() {
            Some((section, path, ranges))
                if *section == span.section && *path == span.path =>
            {
                ranges.push((span.start, span.end));
            }
            _ => groups.push((span.section, span.path.clone(), vec![(span.start, span.end)])),
        }
    }

    // 逆文档序改写：splice 只会移动被改叶子之后的兄弟下标，
    // 尚未处理的（更靠前的）路径保持有效
    for (section, path, ranges) in groups.iter().rev() {
        if let Some(s) = document.section_mut(*section) {
            wrap_leaf(&mut s.body, path, ranges);
        }
    }
}

fn wrap_leaf(body: &mut Vec<Node>, path: &NodePath, ranges: &[(usize, usize)]) {
    let Some((parent, index)) = path.parent() else {
        return;
    };
    let Some(children) = node::children_at_mut(body, &parent) else {
        return;
    };
    let Some(Node::Text(text)) = children.get(index) else {
        return;
    };

    let text = text.clone();
    let mut replacement: Vec<Node> = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut cursor = 0usize;
    for &(start, end) in ranges {
        let valid = start >= cursor
            && start < end
            && end <= text.len()
            && text.is_char_boundary(start)
            && text.is_char_boundary(end);
        if !valid {
            continue;
        }
        if start > cursor {
            replacement.push(Node::Text(text[cursor..start].to_string()));
        }
        replacement.push(Node::highlight(&text[start..end]));
        cursor = end;
    }

    if replacement.is_empty() {
        return;
    }
    if cursor < text.len() {
        replacement.push(Node::Text(text[cursor..].to_string()));
    }

    children.splice(index..=index, replacement);
}
