//! The waiting list.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Guests waiting for a room, in arrival order.
///
/// Unbounded and without duplicate detection: the same name can wait
/// several times over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WaitingQueue {
    guests: VecDeque<String>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a guest to the back of the line and returns their 1-based
    /// position.
    pub fn enqueue(&mut self, guest: impl Into<String>) -> usize {
        self.guests.push_back(guest.into());
        self.guests.len()
    }

    /// Removes the guest at the front of the line, if anyone is waiting.
    pub fn dequeue(&mut self) -> Option<String> {
        self.guests.pop_front()
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    /// Waiting guests, front of the line first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.guests.iter().map(String::as_str)
    }
}
