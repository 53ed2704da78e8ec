//! Transient "Copied!" indicator state.
//!
//! Tracked independently of analysis state. Each copy hands out a token;
//! the expiry only clears the indicator when its token is still the latest,
//! so rapid repeat copies keep the indicator alive for a full window.

use std::time::Duration;

/// How long the indicator stays up after a copy.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Which rendered field a copy action targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    Prompt,
}

#[derive(Debug, Default)]
pub struct CopyFeedback {
    active: Option<(CopyTarget, u64)>,
    counter: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a field as just copied; returns the token for the expiry timer.
    pub fn mark(&mut self, target: CopyTarget) -> u64 {
        self.counter += 1;
        self.active = Some((target, self.counter));
        self.counter
    }

    /// Clear the indicator if `token` is still the latest copy.
    pub fn expire(&mut self, token: u64) {
        if matches!(self.active, Some((_, active)) if active == token) {
            self.active = None;
        }
    }

    pub fn is_copied(&self, target: CopyTarget) -> bool {
        matches!(self.active, Some((active, _)) if active == target)
    }

    /// Drop the indicator entirely, e.g. when the result it refers to goes
    /// away.
    pub fn reset(&mut self) {
        self.active = None;
    }
}
