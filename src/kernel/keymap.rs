//! 按键绑定：物理按键到语义命令的映射
//!
//! 默认绑定可被配置覆盖；无法识别的键名或命令名记日志后忽略。

use rustc_hash::FxHashMap;

use crate::core::{parse_key, Command, Key};
use crate::services::config::ReaderConfig;

#[derive(Debug)]
pub struct Keymap {
    bindings: FxHashMap<Key, Command>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Keymap {
    pub fn with_defaults() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert(Key::Left, Command::PrevSection);
        bindings.insert(Key::Right, Command::NextSection);
        bindings.insert(Key::Home, Command::FirstSection);
        bindings.insert(Key::End, Command::LastSection);
        bindings.insert(Key::Escape, Command::ClearSearch);
        Self { bindings }
    }

    pub fn from_config(config: &ReaderConfig) -> Self {
        let mut keymap = Self::with_defaults();
        for (key_name, command_name) in &config.keybindings {
            let Some(key) = parse_key(key_name) else {
                tracing::warn!(key = %key_name, "ignoring binding with unknown key");
                continue;
            };
            match Command::from_name(command_name) {
                Some(cmd) => {
                    keymap.bindings.insert(key, cmd);
                }
                None => {
                    tracing::warn!(command = %command_name, "ignoring binding with unknown command");
                }
            }
        }
        keymap
    }

    /// 搜索框聚焦时按键属于输入框本身，不触发任何命令
    pub fn command_for_key(&self, key: Key, typing_in_search: bool) -> Option<Command> {
        if typing_in_search {
            return None;
        }
        self.bindings.get(&key).copied()
    }
}
