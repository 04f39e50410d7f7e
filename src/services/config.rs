//! 配置服务：阅读器配置的定义与落盘
//!
//! 配置文件是 JSON；缺失或损坏时回退到默认值，不中断启动。

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// 搜索输入防抖间隔
    pub debounce_ms: u64,
    /// 切节滚动安定时间，宿主在此之后再定位高亮
    pub scroll_settle_ms: u64,
    /// 通知自动消失时间
    pub notification_ttl_ms: u64,
    /// 键名 → 命令名 的覆盖表
    pub keybindings: BTreeMap<String, String>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            scroll_settle_ms: 200,
            notification_ttl_ms: 3000,
            keybindings: BTreeMap::new(),
        }
    }
}

impl ReaderConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

/// 读配置文件；读不到或解析失败一律回退默认
pub fn load_config(path: &Path) -> ReaderConfig {
    let Ok(content) = std::fs::read_to_string(path) else {
        return ReaderConfig::default();
    };
    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            ReaderConfig::default()
        }
    }
}

/// 配置文件不存在时写出默认配置
pub fn ensure_config_file(path: &Path) -> std::io::Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(&ReaderConfig::default())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    std::fs::write(path, content)
}
