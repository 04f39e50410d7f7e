use std::time::Instant;

use crate::core::Command;
use crate::search::controller;

use super::notification::Notification;
use super::state::SearchPhase;
use super::{navigation, Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::RunCommand(cmd) => self.dispatch_command(cmd),
            Action::NavigateTo { section } => self.navigate(section),
            Action::HashChanged { hash } => {
                let target = navigation::parse_hash(&hash)
                    .and_then(|id| self.state.document.index_of(id));
                match target {
                    Some(section) => self.navigate(section),
                    None => DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                }
            }
            Action::SearchInputChanged { text, now } => {
                self.state
                    .search
                    .debouncer
                    .schedule(text.trim().to_string(), now);
                let changed = self.state.search.input != text;
                self.state.search.input = text;
                DispatchResult {
                    effects: Vec::new(),
                    state_changed: changed,
                }
            }
            Action::SearchSubmit { now } => {
                self.state.search.debouncer.cancel();
                let term = self.state.search.input.trim().to_string();
                self.perform_search(&term, now)
            }
            Action::ToggleBlock { id } => {
                let expanded = self.state.ui.toggle_block(&id);
                let effects = if expanded {
                    vec![Effect::ScrollToBlock { id }]
                } else {
                    Vec::new()
                };
                DispatchResult {
                    effects,
                    state_changed: true,
                }
            }
            Action::Tick { now } => {
                let mut result = match self.state.search.debouncer.poll(now) {
                    Some(term) => self.perform_search(&term, now),
                    None => DispatchResult {
                        effects: Vec::new(),
                        state_changed: false,
                    },
                };
                if self
                    .state
                    .notification
                    .as_ref()
                    .is_some_and(|n| n.is_expired(now))
                {
                    self.state.notification = None;
                    result.state_changed = true;
                }
                result
            }
        }
    }

    fn dispatch_command(&mut self, cmd: Command) -> DispatchResult {
        let current = self.state.ui.current_section;
        let len = self.state.document.len();
        match cmd {
            // 边界上的前后翻节是完全的空操作，连高亮都不清
            Command::NextSection if current + 1 >= len => DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            },
            Command::NextSection => self.navigate(current + 1),
            Command::PrevSection if current == 0 => DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            },
            Command::PrevSection => self.navigate(current - 1),
            Command::FirstSection => self.navigate(0),
            Command::LastSection if len == 0 => DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            },
            Command::LastSection => self.navigate(len - 1),
            Command::ClearSearch => self.clear_search(),
        }
    }

    /// 手动导航：不保留搜索高亮
    fn navigate(&mut self, target: usize) -> DispatchResult {
        let len = self.state.document.len();
        let Some(target) = navigation::clamp_section(target, len) else {
            return DispatchResult {
                effects: Vec::new(),
                state_changed: false,
            };
        };

        let cleared = self.clear_highlights();
        let moved = self.state.ui.current_section != target;
        if moved {
            self.state.ui.current_section = target;
        }

        let effects = if moved {
            let mut effects = vec![Effect::ScrollToTop];
            effects.extend(self.section_effects(target));
            effects
        } else {
            Vec::new()
        };

        DispatchResult {
            effects,
            state_changed: moved || cleared,
        }
    }

    /// 当前节对外可见的同步动作：锚点 + 播报
    fn section_effects(&self, section: usize) -> Vec<Effect> {
        let Some(s) = self.state.document.section(section) else {
            return Vec::new();
        };
        vec![
            Effect::UpdateHash(navigation::section_hash(&s.id)),
            Effect::Announce(format!("Navegando a la sección {}", section + 1)),
        ]
    }

    fn clear_highlights(&mut self) -> bool {
        if matches!(self.state.search.phase, SearchPhase::Highlighted { .. }) {
            controller::clear(&mut self.state.document);
            self.state.search.phase = SearchPhase::Idle;
            true
        } else {
            false
        }
    }

    fn clear_search(&mut self) -> DispatchResult {
        let mut changed = self.clear_highlights();
        if !self.state.search.input.is_empty() {
            self.state.search.input.clear();
            changed = true;
        }
        changed |= self.state.search.debouncer.cancel();
        if self.state.notification.is_some() {
            self.state.notification = None;
            changed = true;
        }
        DispatchResult {
            effects: Vec::new(),
            state_changed: changed,
        }
    }

    fn perform_search(&mut self, term: &str, now: Instant) -> DispatchResult {
        if term.is_empty() {
            let cleared = self.clear_highlights();
            return DispatchResult {
                effects: Vec::new(),
                state_changed: cleared,
            };
        }

        tracing::debug!(term, "performing search");
        let outcome = controller::search(&mut self.state.document, term);
        let ttl = self.state.config.notification_ttl();

        if let Some(first) = outcome.first {
            self.state.search.phase = SearchPhase::Highlighted {
                term: term.to_string(),
            };
            self.state.ui.current_section = first.section_index;
            self.state.notification = Some(Notification::search_results(
                outcome.total,
                term,
                now,
                ttl,
            ));

            // 搜索跳节不经过 navigate：它必须保住刚打上的高亮
            let mut effects = self.section_effects(first.section_index);
            effects.push(Effect::ScrollToMatch {
                section: first.section_index,
                locator: first.locator,
            });
            DispatchResult {
                effects,
                state_changed: true,
            }
        } else {
            self.state.search.phase = SearchPhase::Idle;
            self.state.notification = Some(Notification::no_results(term, now, ttl));
            DispatchResult {
                effects: Vec::new(),
                state_changed: true,
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
