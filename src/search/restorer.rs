//! 恢复器：撤销高亮，把文档还原到未高亮的规范形
//!
//! 每个高亮标记被替换回其纯文本内容，随后合并相邻文本叶子，
//! 结果与从未高亮过的文档逐节点相等。对已干净的文档是幂等空操作。

use crate::content::{node, Document, Node};

pub fn clear(document: &mut Document) {
    for section in &mut document.sections {
        unwrap_highlights(&mut section.body);
        node::normalize(&mut section.body);
    }
}

fn unwrap_highlights(nodes: &mut Vec<Node>) {
    let mut index = 0;
    while index < nodes.len() {
        match &mut nodes[index] {
            Node::Element(e) if e.is_highlight() => {
                let text = node::plain_text(&e.children);
                nodes[index] = Node::Text(text);
            }
            Node::Element(e) => unwrap_highlights(&mut e.children),
            Node::Text(_) => {}
        }
        index += 1;
    }
}
