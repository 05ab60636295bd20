//! Bounded message history.

use std::collections::VecDeque;

/// Newest-first list of narrative messages that keeps only the most recent
/// `capacity` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 5;

    /// Creates an empty log. A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Add a message at the front, dropping the oldest beyond capacity.
    pub fn push(&mut self, message: impl Into<String>) {
        self.entries.push_front(message.into());
        self.entries.truncate(self.capacity);
    }

    /// Messages, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
