//! In-memory calculation history.
//!
//! Bounded so a long session cannot grow without limit. Entries are
//! serde-serializable for JSON export, but nothing here touches disk.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single recorded calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression that was evaluated.
    pub expression: String,
    /// The numeric result.
    pub result: f64,
    /// Unix epoch milliseconds at evaluation time.
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with an explicit timestamp (for testing).
    #[must_use]
    pub const fn with_timestamp(expression: String, result: f64, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }

    /// `expression = result` display form.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded queue of past calculations.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size.
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates a history bounded to `max_entries`.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Appends an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a calculation.
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression.to_owned(), result));
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no calculations have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// The most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// The entry at `index` (0 = oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes all entries to JSON.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Rebuilds a history from JSON produced by [`History::to_json`].
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` deserialization failures.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_display() {
        let entry = HistoryEntry::with_timestamp("10/2".into(), 5.0, 0);
        assert_eq!(entry.display(), "10/2 = 5");
    }

    #[test]
    fn record_and_query() {
        let mut history = History::new();
        history.record("2+2", 4.0);
        history.record("3*3", 9.0);
        assert_eq!(history.len(), 2);
        assert!(!history.is_empty());
        assert_eq!(history.last().unwrap().result, 9.0);
        assert_eq!(history.get(0).unwrap().expression, "2+2");
    }

    #[test]
    fn iter_orders() {
        let mut history = History::new();
        history.record("1", 1.0);
        history.record("2", 2.0);
        let oldest_first: Vec<_> = history.iter().map(|e| e.result).collect();
        let newest_first: Vec<_> = history.iter_rev().map(|e| e.result).collect();
        assert_eq!(oldest_first, vec![1.0, 2.0]);
        assert_eq!(newest_first, vec![2.0, 1.0]);
    }

    #[test]
    fn bounded_eviction() {
        let mut history = History::with_capacity(3);
        for i in 0..5 {
            history.record(&i.to_string(), f64::from(i));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.get(0).unwrap().result, 2.0);
    }

    #[test]
    fn clear_removes_entries() {
        let mut history = History::new();
        history.record("1+1", 2.0);
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn json_round_trip() {
        let mut history = History::new();
        history.push(HistoryEntry::with_timestamp("6*7".into(), 42.0, 1_000));
        let json = history.to_json().unwrap();
        let restored = History::from_json(&json).unwrap();
        assert_eq!(restored.len(), 1);
        assert_eq!(restored.last().unwrap().expression, "6*7");
        assert_eq!(restored.last().unwrap().timestamp, 1_000);
    }
}
