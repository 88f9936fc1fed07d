//! Transient notifications.
//!
//! A [`Toast`] holds at most one message. Showing a new message cancels the
//! pending dismissal of the previous one and restarts the timer.

use std::time::{Duration, Instant};

/// How long a message stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(2500);

/// A message and the moment it should disappear.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// The text shown to the user.
    pub message: String,
    /// When the message is dismissed.
    pub dismiss_at: Instant,
}

/// A single slot notification area.
#[derive(Clone, Debug)]
pub struct Toast {
    duration: Duration,
    slot: Option<Notification>,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(TOAST_DURATION)
    }
}

impl Toast {
    /// Create an empty toast whose messages last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            slot: None,
        }
    }

    /// Show `message` from `now`, replacing whatever was showing.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) -> &Notification {
        let message = message.into();
        if let Some(previous) = &self.slot {
            tracing::trace!(previous = %previous.message, "replacing notification");
        }
        tracing::debug!(%message, "notify");
        self.slot.insert(Notification {
            message,
            dismiss_at: now + self.duration,
        })
    }

    /// The message visible at `now`, if any.
    pub fn current(&self, now: Instant) -> Option<&str> {
        self.slot
            .as_ref()
            .filter(|n| now < n.dismiss_at)
            .map(|n| n.message.as_str())
    }

    /// Returns true if a message is visible at `now`.
    pub fn is_visible(&self, now: Instant) -> bool {
        self.current(now).is_some()
    }

    /// Drop the message if its time is up. Returns true if one was dropped.
    pub fn dismiss_expired(&mut self, now: Instant) -> bool {
        if self.slot.as_ref().is_some_and(|n| now >= n.dismiss_at) {
            self.slot = None;
            true
        } else {
            false
        }
    }

    /// The pending notification, visible or not yet dismissed.
    pub fn pending(&self) -> Option<&Notification> {
        self.slot.as_ref()
    }
}
