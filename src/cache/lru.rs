//! LRU Tracker Module
//!
//! Recency order of cached employee ids, used to bound the per-id cache.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Front = most recently used id, back = least recently used.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as just used.
    pub fn touch(&mut self, id: &str) {
        if self.order.front().map(String::as_str) == Some(id) {
            return;
        }
        self.remove(id);
        self.order.push_front(id.to_string());
    }

    pub fn remove(&mut self, id: &str) {
        if let Some(pos) = self.order.iter().position(|k| k == id) {
            self.order.remove(pos);
        }
    }

    /// Pops the least recently used id.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
