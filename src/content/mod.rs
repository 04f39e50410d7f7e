//! 内容模型：文档、节与结构树

pub mod document;
pub mod node;

pub use document::{Document, DocumentError, Section};
pub use node::{Element, ElementKind, Node, NodePath};
