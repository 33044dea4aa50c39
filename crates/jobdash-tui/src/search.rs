use std::time::{Duration, Instant};

use jobdash_core::{Debouncer, InputState};

/// Search-bar state: the text being edited plus the committed query the
/// fetcher actually runs with. Edits commit once the debounce window
/// closes, or immediately on Enter.
pub struct SearchState {
    pub input: InputState,
    debouncer: Debouncer,
    committed: String,
}

impl SearchState {
    pub fn new(delay: Duration) -> Self {
        Self {
            input: InputState::new(),
            debouncer: Debouncer::new(delay),
            committed: String::new(),
        }
    }

    /// The query the result list currently reflects.
    pub fn query(&self) -> &str {
        &self.committed
    }

    /// Record an edit to the input buffer.
    pub fn edited(&mut self, now: Instant) {
        self.debouncer.trigger(now);
    }

    /// Commit immediately, bypassing the debounce window. Returns the new
    /// query, or `None` when the text has not actually changed.
    pub fn commit_now(&mut self) -> Option<&str> {
        self.debouncer.cancel();
        self.commit()
    }

    /// Tick handler: commits once the debounce deadline passes.
    pub fn poll(&mut self, now: Instant) -> Option<&str> {
        if self.debouncer.fire(now) {
            self.commit()
        } else {
            None
        }
    }

    fn commit(&mut self) -> Option<&str> {
        if self.input.as_str() == self.committed {
            return None;
        }
        self.committed = self.input.as_str().to_string();
        Some(&self.committed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    fn type_str(search: &mut SearchState, text: &str, now: Instant) {
        for c in text.chars() {
            search.input.insert_char(c);
            search.edited(now);
        }
    }

    #[test]
    fn test_commits_after_debounce_window() {
        let mut search = SearchState::new(DELAY);
        let start = Instant::now();

        type_str(&mut search, "pharma", start);
        assert!(search.poll(start).is_none());
        assert_eq!(search.poll(start + DELAY), Some("pharma"));
        assert_eq!(search.query(), "pharma");
    }

    #[test]
    fn test_no_commit_when_text_unchanged() {
        let mut search = SearchState::new(DELAY);
        let start = Instant::now();

        // Type a char, then backspace it: net no change.
        search.input.insert_char('x');
        search.edited(start);
        search.input.backspace();
        search.edited(start);

        assert!(search.poll(start + DELAY).is_none());
    }

    #[test]
    fn test_enter_commits_immediately() {
        let mut search = SearchState::new(DELAY);
        let start = Instant::now();

        type_str(&mut search, "qa", start);
        assert_eq!(search.commit_now(), Some("qa"));
        // Debouncer was cancelled; no second commit on the next tick.
        assert!(search.poll(start + DELAY).is_none());
    }

    #[test]
    fn test_typing_keeps_pushing_deadline() {
        let mut search = SearchState::new(DELAY);
        let start = Instant::now();

        search.input.insert_char('q');
        search.edited(start);
        search.input.insert_char('c');
        search.edited(start + Duration::from_millis(400));

        assert!(search.poll(start + DELAY).is_none());
        assert_eq!(search.poll(start + Duration::from_millis(900)), Some("qc"));
    }
}
