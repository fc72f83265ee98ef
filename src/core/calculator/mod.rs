pub mod aggregate;
pub mod overlap;

use chrono::Duration;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered map of accumulated durations.
///
/// Iteration follows first insertion, which keeps tie breaking in the ranking
/// deterministic for a given input.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    entries: Vec<(K, Duration)>,
    positions: HashMap<K, usize>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to `key`, inserting the key if it is new.
    pub fn add(&mut self, key: K, amount: Duration) {
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 += amount,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push((key, amount));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<Duration> {
        self.positions.get(key).map(|&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, Duration)> {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
