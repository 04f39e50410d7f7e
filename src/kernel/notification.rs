//! 通知：搜索结果提示的构造与过期
//!
//! 通知是纯状态，不带定时器；过期由 `Tick` 轮询判断。

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(message: String, kind: NotificationKind, now: Instant, ttl: Duration) -> Self {
        Self {
            message,
            kind,
            expires_at: now + ttl,
        }
    }

    pub fn search_results(count: usize, term: &str, now: Instant, ttl: Duration) -> Self {
        let plural = if count == 1 { "" } else { "s" };
        Self::new(
            format!("Encontrados {count} resultado{plural} para \"{term}\""),
            NotificationKind::Success,
            now,
            ttl,
        )
    }

    pub fn no_results(term: &str, now: Instant, ttl: Duration) -> Self {
        Self::new(
            format!("No se encontraron resultados para \"{term}\""),
            NotificationKind::Warning,
            now,
            ttl,
        )
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
