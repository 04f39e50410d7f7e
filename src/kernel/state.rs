use compact_str::CompactString;
use rustc_hash::FxHashSet;

use crate::content::Document;
use crate::services::config::ReaderConfig;

use super::debounce::Debouncer;
use super::navigation;
use super::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPhase {
    Idle,
    Highlighted { term: String },
}

#[derive(Debug)]
pub struct SearchUiState {
    pub input: String,
    pub phase: SearchPhase,
    pub debouncer: Debouncer,
}

impl SearchUiState {
    fn new(config: &ReaderConfig) -> Self {
        Self {
            input: String::new(),
            phase: SearchPhase::Idle,
            debouncer: Debouncer::new(config.debounce()),
        }
    }
}

#[derive(Debug, Default)]
pub struct UiState {
    pub current_section: usize,
    pub expanded: FxHashSet<CompactString>,
}

impl UiState {
    /// 切换折叠块，返回切换后是否展开
    pub fn toggle_block(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(CompactString::from(id));
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

pub struct AppState {
    pub config: ReaderConfig,
    pub document: Document,
    pub ui: UiState,
    pub search: SearchUiState,
    pub notification: Option<Notification>,
}

impl AppState {
    pub fn new(document: Document, config: ReaderConfig) -> Self {
        Self {
            document,
            ui: UiState::default(),
            search: SearchUiState::new(&config),
            notification: None,
            config,
        }
    }

    pub fn progress_percent(&self) -> f32 {
        navigation::progress_percent(self.ui.current_section, self.document.len())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
