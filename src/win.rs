//! Win detection and the auto-dismissing win banner.

use std::time::Duration;

use instant::Instant;
use serde::Serialize;

use crate::validator::FoundWords;

/// Lifecycle of one puzzle. `Setup` only exists while a puzzle is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameState {
    Setup,
    InProgress,
    Won,
}

/// True once every target word has been found.
#[must_use]
pub fn is_complete(found: &FoundWords, words: &[String]) -> bool {
    !words.is_empty() && found.len() == words.len()
}

/// One-shot banner deadline. Showing again replaces the deadline, so there is
/// never more than one pending dismissal.
#[derive(Debug, Clone)]
pub struct WinBanner {
    duration: Duration,
    deadline: Option<Instant>,
}

impl WinBanner {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        WinBanner { duration, deadline: None }
    }

    /// Show the banner until `now + duration`, cancelling any earlier deadline.
    pub fn show(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Dismiss the banner if its deadline has passed. Returns true only on
    /// the call that dismisses it.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Cell;

    const SECS_3: Duration = Duration::from_secs(3);

    #[test]
    fn test_is_complete() {
        let words = vec!["red".to_string(), "blue".to_string()];
        let mut found = FoundWords::default();
        assert!(!is_complete(&found, &words));
        found.insert("red".to_string(), vec![Cell::new(0, 0)]);
        assert!(!is_complete(&found, &words));
        found.insert("blue".to_string(), vec![Cell::new(1, 0)]);
        assert!(is_complete(&found, &words));
    }

    #[test]
    fn test_empty_word_list_is_never_complete() {
        assert!(!is_complete(&FoundWords::default(), &[]));
    }

    #[test]
    fn test_banner_lifecycle() {
        let start = Instant::now();
        let mut banner = WinBanner::new(SECS_3);
        assert!(!banner.is_visible(start));

        banner.show(start);
        assert!(banner.is_visible(start));
        assert!(banner.is_visible(start + Duration::from_millis(2999)));
        assert!(!banner.tick(start + Duration::from_secs(1)));

        assert!(!banner.is_visible(start + SECS_3));
        assert!(banner.tick(start + SECS_3));
        // already dismissed
        assert!(!banner.tick(start + Duration::from_secs(4)));
        assert!(banner.deadline().is_none());
    }

    #[test]
    fn test_show_again_reschedules_single_deadline() {
        let start = Instant::now();
        let mut banner = WinBanner::new(SECS_3);
        banner.show(start);
        banner.show(start + Duration::from_secs(2));

        assert_eq!(banner.deadline(), Some(start + Duration::from_secs(5)));
        assert!(!banner.tick(start + Duration::from_secs(4)));
        assert!(banner.is_visible(start + Duration::from_secs(4)));
        assert!(banner.tick(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_cancel() {
        let start = Instant::now();
        let mut banner = WinBanner::new(SECS_3);
        banner.show(start);
        banner.cancel();
        assert!(!banner.is_visible(start));
        assert!(!banner.tick(start + SECS_3));
    }
}
