//! 文档与节
//!
//! 一份教学文档由有序的节（section）组成，每节对应页面上的一个
//! 标签页。文档内容以静态 JSON 形式编写，启动时反序列化载入。

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::node::{self, Node};

#[derive(Debug)]
pub enum DocumentError {
    Parse(serde_json::Error),
    /// 作者内容中出现了保留的高亮标记
    ReservedHighlight { section_id: CompactString },
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::Parse(e) => write!(f, "document parse error: {}", e),
            DocumentError::ReservedHighlight { section_id } => {
                write!(f, "section '{}' contains a reserved highlight marker", section_id)
            }
        }
    }
}

impl std::error::Error for DocumentError {}

impl From<serde_json::Error> for DocumentError {
    fn from(e: serde_json::Error) -> Self {
        DocumentError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: CompactString,
    pub title: String,
    #[serde(default)]
    pub body: Vec<Node>,
}

impl Section {
    pub fn plain_text(&self) -> String {
        node::plain_text(&self.body)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// 解析作者编写的 JSON 文档；保留的高亮标记视为内容错误。
    /// 载入后立即 normalize，使节点边界处于规范形。
    pub fn from_json(data: &str) -> Result<Self, DocumentError> {
        let mut document: Document = serde_json::from_str(data)?;
        for section in &mut document.sections {
            if !node::highlight_paths(&section.body).is_empty() {
                return Err(DocumentError::ReservedHighlight {
                    section_id: section.id.clone(),
                });
            }
            node::normalize(&mut section.body);
        }
        Ok(document)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    pub fn index_of(&self, section_id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id == section_id)
    }
}
