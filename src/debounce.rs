// ⏱️ Debouncer - Collapse rapid query submissions
//
// Caller-side scheduling helper, not part of the engine contract. The engine
// itself is synchronous and stateless; a UI shell feeds keystrokes through a
// Debouncer and only runs the filter once input has been quiet for the
// window. Poll-driven so it works in any event loop without a timer thread.

use std::time::{Duration, Instant};

/// Quiescence window used by the reference UI shell
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(150);

/// Collapses successive `submit` calls into the most recent query, released
/// by `poll` once the window has elapsed since the last submission.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<String>,
    last_submit: Option<Instant>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Debouncer {
            window,
            pending: None,
            last_submit: None,
        }
    }

    /// Record a new query, replacing any pending one and restarting the
    /// quiescence window.
    pub fn submit(&mut self, query: impl Into<String>) {
        self.pending = Some(query.into());
        self.last_submit = Some(Instant::now());
    }

    /// Release the pending query if the window has elapsed since the last
    /// submission. Returns `None` while quiescing or when nothing is
    /// pending; a released query is not returned again.
    pub fn poll(&mut self) -> Option<String> {
        self.poll_at(Instant::now())
    }

    /// Release the pending query immediately, ignoring the window.
    pub fn flush(&mut self) -> Option<String> {
        self.last_submit = None;
        self.pending.take()
    }

    // Clock seam for tests.
    fn poll_at(&mut self, now: Instant) -> Option<String> {
        let submitted = self.last_submit?;
        if now.duration_since(submitted) < self.window {
            return None;
        }
        self.last_submit = None;
        self.pending.take()
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_query_until_window_elapses() {
        let mut debouncer = Debouncer::new(Duration::from_millis(150));
        debouncer.submit("jo");

        let submitted = debouncer.last_submit.unwrap();
        assert_eq!(debouncer.poll_at(submitted + Duration::from_millis(10)), None);
        assert_eq!(
            debouncer.poll_at(submitted + Duration::from_millis(150)),
            Some("jo".to_string())
        );
    }

    #[test]
    fn test_rapid_submissions_collapse_to_latest() {
        let mut debouncer = Debouncer::new(Duration::from_millis(150));
        debouncer.submit("j");
        debouncer.submit("jo");
        debouncer.submit("john");

        let submitted = debouncer.last_submit.unwrap();
        let released = debouncer.poll_at(submitted + Duration::from_millis(200));
        assert_eq!(released, Some("john".to_string()));

        // Released once only.
        assert_eq!(debouncer.poll_at(submitted + Duration::from_millis(400)), None);
    }

    #[test]
    fn test_poll_with_nothing_pending() {
        let mut debouncer = Debouncer::default();
        assert_eq!(debouncer.poll(), None);
    }

    #[test]
    fn test_flush_releases_immediately() {
        let mut debouncer = Debouncer::new(Duration::from_millis(150));
        debouncer.submit("john");

        assert_eq!(debouncer.flush(), Some("john".to_string()));
        assert_eq!(debouncer.flush(), None);
        assert_eq!(debouncer.poll(), None);
    }
}
