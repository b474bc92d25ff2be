//! Debounced search input.

use std::time::{Duration, Instant};

/// Search text as typed, plus the value that has settled long enough to
/// be applied to the table.
#[derive(Debug, Clone)]
pub struct SearchBox {
    input: String,
    applied: String,
    last_edit: Option<Instant>,
    debounce: Duration,
}

impl SearchBox {
    pub fn new(debounce: Duration) -> Self {
        Self {
            input: String::new(),
            applied: String::new(),
            last_edit: None,
            debounce,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn applied(&self) -> &str {
        &self.applied
    }

    pub fn push(&mut self, ch: char, now: Instant) {
        self.input.push(ch);
        self.last_edit = Some(now);
    }

    pub fn backspace(&mut self, now: Instant) {
        if self.input.pop().is_some() {
            self.last_edit = Some(now);
        }
    }

    /// Clear both typed and applied text immediately.
    pub fn clear(&mut self) {
        self.input.clear();
        self.applied.clear();
        self.last_edit = None;
    }

    /// Apply the typed text once it has been quiet for the debounce period.
    /// Returns `true` if the applied value changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(edited) = self.last_edit else {
            return false;
        };
        if now.duration_since(edited) < self.debounce {
            return false;
        }
        self.last_edit = None;
        if self.applied == self.input {
            return false;
        }
        self.applied = self.input.clone();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_after_quiet_period() {
        let start = Instant::now();
        let mut search = SearchBox::new(Duration::from_millis(300));
        search.push('l', start);
        search.push('a', start + Duration::from_millis(100));

        assert!(!search.tick(start + Duration::from_millis(350)));
        assert_eq!(search.applied(), "");

        assert!(search.tick(start + Duration::from_millis(400)));
        assert_eq!(search.applied(), "la");
        assert!(!search.tick(start + Duration::from_millis(900)));
    }

    #[test]
    fn backspace_to_same_value_is_not_a_change() {
        let start = Instant::now();
        let mut search = SearchBox::new(Duration::from_millis(10));
        search.push('x', start);
        search.backspace(start);
        assert!(!search.tick(start + Duration::from_millis(20)));
        assert_eq!(search.input(), "");
    }

    #[test]
    fn clear_resets_everything() {
        let start = Instant::now();
        let mut search = SearchBox::new(Duration::ZERO);
        search.push('a', start);
        assert!(search.tick(start));
        search.clear();
        assert_eq!(search.input(), "");
        assert_eq!(search.applied(), "");
    }
}
