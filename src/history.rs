//! Bounded spin history, most recent first

use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;

/// Maximum number of spins retained
pub const HISTORY_CAPACITY: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct History {
    spins: VecDeque<u8>,
}

impl History {
    pub fn new() -> Self {
        Self {
            spins: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
        }
    }

    /// Prepend a spin, evicting the oldest once over capacity
    pub fn push(&mut self, number: u8) {
        self.spins.push_front(number);
        self.spins.truncate(HISTORY_CAPACITY);
    }

    pub fn clear(&mut self) {
        self.spins.clear();
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spins.is_empty()
    }

    /// Spin at `index`, where 0 is the most recent
    pub fn get(&self, index: usize) -> Option<u8> {
        self.spins.get(index).copied()
    }

    /// Most-recent-first iterator
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.spins.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.spins.iter().copied().collect()
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.spins.is_empty() {
            return f.write_str("Empty");
        }
        f.write_str(&crate::models::join_numbers(&self.spins))
    }
}
