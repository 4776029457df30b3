use std::time::Instant;

/// A single log line with the elapsed time at which it was recorded.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub elapsed_secs: u64,
    pub text: String,
}

/// Log of dispatched commands, displayed in the activity panel.
pub struct ActivityLog {
    started: Instant,
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, text: impl Into<String>) {
        self.entries.push(ActivityEntry {
            elapsed_secs: self.started.elapsed().as_secs(),
            text: text.into(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_in_order() {
        let mut log = ActivityLog::new();
        log.record("first");
        log.record("second");

        let texts: Vec<&str> = log.entries().iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["first", "second"]);
    }

    #[test]
    fn clear_empties_the_log() {
        let mut log = ActivityLog::new();
        log.record("something");
        log.clear();
        assert!(log.is_empty());
    }
}
