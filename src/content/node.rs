//! 内容树模型
//!
//! 页面正文被建模为一棵结构树：`Text` 叶子承载纯文本，
//! `Element` 节点承载结构（段落、列表、可展开块等）。
//! `ElementKind::Highlight` 保留给搜索高亮标记，作者内容中不出现。

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Bold,
    Italic,
    List,
    ListItem,
    Expandable,
    Highlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    /// 对应页面标记里的 id 属性（可展开块通过它定位）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CompactString>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(kind: ElementKind, children: Vec<Node>) -> Self {
        Self {
            kind,
            id: None,
            children,
        }
    }

    pub fn is_highlight(&self) -> bool {
        self.kind == ElementKind::Highlight
    }
}

/// 文本叶子序列化为裸字符串，元素序列化为对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    pub fn element(kind: ElementKind, children: Vec<Node>) -> Self {
        Node::Element(Element::new(kind, children))
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Node::Element(Element::new(
            ElementKind::Highlight,
            vec![Node::Text(text.into())],
        ))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(s) => Some(s),
            Node::Element(_) => None,
        }
    }

    pub fn is_highlight(&self) -> bool {
        matches!(self, Node::Element(e) if e.is_highlight())
    }
}

/// 从节的正文根到某个节点的子下标序列。
///
/// 作为定位器（locator）对外暴露：宿主用它滚动到高亮标记，
/// 搜索引擎用它寻址文本叶子。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<(NodePath, usize)> {
        let (&last, rest) = self.0.split_last()?;
        Some((NodePath(rest.to_vec()), last))
    }
}

pub fn node_at<'a>(body: &'a [Node], path: &NodePath) -> Option<&'a Node> {
    let (&first, rest) = path.indices().split_first()?;
    let mut node = body.get(first)?;
    for &index in rest {
        match node {
            Node::Element(e) => node = e.children.get(index)?,
            Node::Text(_) => return None,
        }
    }
    Some(node)
}

/// 返回 `parent_path` 指向的子节点列表；空路径返回正文根列表
pub fn children_at_mut<'a>(
    body: &'a mut Vec<Node>,
    parent_path: &NodePath,
) -> Option<&'a mut Vec<Node>> {
    let mut children = body;
    for &index in parent_path.indices() {
        match children.get_mut(index)? {
            Node::Element(e) => children = &mut e.children,
            Node::Text(_) => return None,
        }
    }
    Some(children)
}

/// 按文档序收集文本叶子（跳过高亮标记内部的文本，避免重复包裹）
pub fn walk_text(body: &[Node]) -> Vec<(NodePath, &str)> {
    let mut leaves = Vec::new();
    collect_text(body, &NodePath::default(), &mut leaves);
    leaves
}

fn collect_text<'a>(nodes: &'a [Node], prefix: &NodePath, out: &mut Vec<(NodePath, &'a str)>) {
    for (index, node) in nodes.iter().enumerate() {
        match node {
            Node::Text(s) => out.push((prefix.child(index), s)),
            Node::Element(e) => {
                if !e.is_highlight() {
                    collect_text(&e.children, &prefix.child(index), out);
                }
            }
        }
    }
}

/// 按文档序收集高亮标记的路径
pub fn highlight_paths(body: &[Node]) -> Vec<NodePath> {
    let mut paths = Vec::new();
    collect_highlights(body, &NodePath::default(), &mut paths);
    paths
}

fn collect_highlights(nodes: &[Node], prefix: &NodePath, out: &mut Vec<NodePath>) {
    for (index, node) in nodes.iter().enumerate() {
        if let Node::Element(e) = node {
            let path = prefix.child(index);
            if e.is_highlight() {
                out.push(path);
            } else {
                collect_highlights(&e.children, &path, out);
            }
        }
    }
}

/// 合并相邻文本叶子并丢弃空文本（对应 DOM 的 normalize）。
/// 载入与撤销高亮后都走这一步，保证节点边界有唯一的规范形。
pub fn normalize(nodes: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes.drain(..) {
        match node {
            Node::Text(s) => {
                if s.is_empty() {
                    continue;
                }
                if let Some(Node::Text(last)) = merged.last_mut() {
                    last.push_str(&s);
                } else {
                    merged.push(Node::Text(s));
                }
            }
            Node::Element(mut e) => {
                normalize(&mut e.children);
                merged.push(Node::Element(e));
            }
        }
    }
    *nodes = merged;
}

/// 拼接全部纯文本（含高亮标记内部），用于内容等价性比较
pub fn plain_text(body: &[Node]) -> String {
    let mut text = String::new();
    append_plain_text(body, &mut text);
    text
}

fn append_plain_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(s) => out.push_str(s),
            Node::Element(e) => append_plain_text(&e.children, out),
        }
    }
}
