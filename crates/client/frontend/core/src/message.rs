//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages produced from runtime events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
}

/// How long a message should stay up before the next one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Beat {
    #[default]
    None,
    Short,
    Outcome,
    Turn,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
    pub beat: Beat,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel, beat: Beat) -> Self {
        Self {
            text: text.into(),
            level,
            beat,
        }
    }

    pub fn info(text: impl Into<String>, beat: Beat) -> Self {
        Self::new(text, MessageLevel::Info, beat)
    }

    pub fn warning(text: impl Into<String>, beat: Beat) -> Self {
        Self::new(text, MessageLevel::Warning, beat)
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_drops_oldest_entries_beyond_capacity() {
        let mut log = MessageLog::new(2);
        for text in ["a", "b", "c"] {
            log.push(MessageEntry::info(text, Beat::None));
        }

        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, ["b", "c"]);
    }
}
