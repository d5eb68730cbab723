//! Transient user-facing messages.

use std::time::{Duration, Instant};

/// How long a failed-login or failed-signup message stays visible.
pub const DEFAULT_NOTICE_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
struct Notice {
    message: String,
    expires_at: Instant,
}

/// Holds at most one message with a deadline.
///
/// Posting a new message replaces the pending one and restarts the window.
/// Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct NoticeBoard {
    display_for: Duration,
    pending: Option<Notice>,
}

impl Default for NoticeBoard {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_DURATION)
    }
}

impl NoticeBoard {
    pub fn new(display_for: Duration) -> Self {
        Self {
            display_for,
            pending: None,
        }
    }

    pub fn post(&mut self, message: impl Into<String>, now: Instant) {
        self.pending = Some(Notice {
            message: message.into(),
            expires_at: now + self.display_for,
        });
    }

    /// The visible message at `now`, if it has not expired.
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.pending
            .as_ref()
            .filter(|notice| now < notice.expires_at)
            .map(|notice| notice.message.as_str())
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn display_for(&self) -> Duration {
        self.display_for
    }
}
