//! Keystroke debouncing for the free-text search box.
//!
//! The engine recomputes the filtered view on every criteria change, so
//! front ends feed rapid edits through a [`Debouncer`] and only apply the
//! settled value. The clock is passed in by the caller, which keeps the
//! quiet-period logic testable without sleeping.

use std::time::{Duration, Instant};

/// Quiet period after the last keystroke before the value settles.
pub const DEFAULT_QUIET: Duration = Duration::from_millis(300);

#[derive(Debug)]
pub struct Debouncer {
    quiet: Duration,
    pending: Option<String>,
    last_push: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
            last_push: None,
        }
    }

    /// Record an edit, replacing any earlier pending value.
    pub fn push(&mut self, text: impl Into<String>, at: Instant) {
        self.pending = Some(text.into());
        self.last_push = Some(at);
    }

    /// The settled value, once the quiet period has elapsed since the last
    /// push. Returns it at most once.
    pub fn poll(&mut self, at: Instant) -> Option<String> {
        let pushed = self.last_push?;
        if at.duration_since(pushed) >= self.quiet {
            self.last_push = None;
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_none()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_QUIET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_pushes_collapse_to_the_last_value() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.push("r", t0);
        d.push("ru", t0 + Duration::from_millis(50));
        d.push("rust", t0 + Duration::from_millis(100));
        assert_eq!(d.poll(t0 + Duration::from_millis(200)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(400)),
            Some("rust".to_string())
        );
    }

    #[test]
    fn settled_value_is_delivered_once() {
        let t0 = Instant::now();
        let mut d = Debouncer::default();
        d.push("x", t0);
        let later = t0 + Duration::from_secs(1);
        assert_eq!(d.poll(later), Some("x".to_string()));
        assert_eq!(d.poll(later), None);
        assert!(d.is_idle());
    }

    #[test]
    fn a_new_push_restarts_the_quiet_period() {
        let t0 = Instant::now();
        let mut d = Debouncer::new(Duration::from_millis(300));
        d.push("a", t0);
        d.push("ab", t0 + Duration::from_millis(250));
        // 300ms after the first push, but only 50ms after the second.
        assert_eq!(d.poll(t0 + Duration::from_millis(300)), None);
        assert_eq!(
            d.poll(t0 + Duration::from_millis(600)),
            Some("ab".to_string())
        );
    }
}
