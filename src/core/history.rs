/// Default number of committed lines kept
pub const DEFAULT_HISTORY_SIZE: usize = 50;

/// Bounded history of submitted lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    /// Entries, oldest first
    entries: Vec<String>,
    /// Maximum number of entries
    max_size: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history with the default size (50)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_HISTORY_SIZE)
    }

    /// Create a history holding at most `max_size` entries
    pub fn with_size(max_size: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_size.min(DEFAULT_HISTORY_SIZE)),
            max_size,
        }
    }

    /// Record a submitted line.
    /// Blank lines and repeats of the latest entry are skipped; the oldest
    /// entry is evicted when full. Returns whether the line was stored.
    pub fn push(&mut self, line: &str) -> bool {
        if line.trim().is_empty() || self.max_size == 0 {
            return false;
        }

        if self.entries.last().is_some_and(|last| last == line) {
            return false;
        }

        if self.entries.len() >= self.max_size {
            self.entries.remove(0); // Remove oldest
        }
        self.entries.push(line.to_string());
        true
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_last() {
        let mut history = History::new();
        assert!(history.push("1 2 +"));
        assert_eq!(history.last(), Some("1 2 +"));

        assert!(history.push("ls"));
        assert_eq!(history.last(), Some("ls"));
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_skips_blank_lines() {
        let mut history = History::new();
        assert!(!history.push(""));
        assert!(!history.push(" \t "));
        assert!(history.is_empty());
    }

    #[test]
    fn test_skips_consecutive_duplicates() {
        let mut history = History::new();
        history.push("pop");
        assert!(!history.push("pop"));
        history.push("ls");
        assert!(history.push("pop"));
        assert_eq!(history.entries(), ["pop", "ls", "pop"]);
    }

    #[test]
    fn test_max_size() {
        let mut history = History::with_size(2);
        history.push("one");
        history.push("two");
        history.push("three");

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0), Some("two"));
        assert_eq!(history.get(1), Some("three"));
    }

    #[test]
    fn test_zero_size_stores_nothing() {
        let mut history = History::with_size(0);
        assert!(!history.push("1"));
        assert!(history.is_empty());
        assert_eq!(history.max_size(), 0);
    }
}
