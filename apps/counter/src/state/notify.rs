//! # Notifications
//!
//! Short-lived messages shown in the status bar after an action.
//!
//! ```text
//!   push("Shift Cleared")      t = 0s      shown
//!   push("PDF Generated")      t = 1s      shown (newest wins)
//!                              t = 5s      "PDF Generated" expires
//! ```

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;

/// How long a notification stays visible.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Oldest notifications are dropped beyond this many.
const MAX_NOTIFICATIONS: usize = 8;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// One message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= NOTIFICATION_TTL
    }
}

/// Bounded queue of recent notifications.
#[derive(Debug, Default)]
pub struct Notifications {
    queue: VecDeque<Notification>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Info, title.into(), message.into(), Instant::now());
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.push(NotificationKind::Error, title.into(), message.into(), Instant::now());
    }

    pub fn push(&mut self, kind: NotificationKind, title: String, message: String, at: Instant) {
        if self.queue.len() == MAX_NOTIFICATIONS {
            self.queue.pop_front();
        }
        self.queue.push_back(Notification {
            kind,
            title,
            message,
            created_at: at,
        });
    }

    /// Drops every notification older than [`NOTIFICATION_TTL`].
    pub fn expire(&mut self, now: Instant) {
        self.queue.retain(|n| !n.is_expired(now));
    }

    /// Newest notification, if any is still queued.
    pub fn latest(&self) -> Option<&Notification> {
        self.queue.back()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
