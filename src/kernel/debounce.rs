//! 输入防抖：显式的单个待触发任务
//!
//! 同一时刻至多存在一个待触发查询；新输入直接替换旧任务而不是
//! 叠加定时器。到期由 `Tick` 轮询触发，陈旧任务因被替换而失效。

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub term: String,
    pub generation: u64,
    pub fire_at: Instant,
}

#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    next_generation: u64,
    pending: Option<PendingQuery>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_generation: 0,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingQuery> {
        self.pending.as_ref()
    }

    /// 替换当前待触发任务，返回新任务的代号
    pub fn schedule(&mut self, term: String, now: Instant) -> u64 {
        let generation = self.next_generation;
        self.next_generation += 1;
        self.pending = Some(PendingQuery {
            term,
            generation,
            fire_at: now + self.delay,
        });
        generation
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// 到期则取出查询词；未到期或无任务返回 None
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        if self.pending.as_ref().is_some_and(|p| now >= p.fire_at) {
            return self.pending.take().map(|p| p.term);
        }
        None
    }
}
