//! Bounded combat log.

use std::collections::VecDeque;

/// Ring buffer of human-readable turn lines; the oldest line is dropped once
/// the capacity is reached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombatLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl CombatLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line.into());
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.back().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = CombatLog::new(2);
        log.push("one");
        log.push("two");
        log.push("three");

        assert_eq!(log.iter().collect::<Vec<_>>(), vec!["two", "three"]);
        assert_eq!(log.last(), Some("three"));
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut log = CombatLog::new(0);
        log.push("one");
        assert!(log.is_empty());
    }
}
