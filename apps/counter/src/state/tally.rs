//! # Counter State
//!
//! The explicit state object the UI loop owns and commands borrow.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CounterState                                                           │
//! │  ┌───────────────────┐  ┌───────────────┐  ┌─────────────────────────┐ │
//! │  │  tally            │  │ active_shift  │  │  notifications          │ │
//! │  │  [ShiftCount; 3]  │  │  1st|2nd|3rd  │  │  newest shown, expiring │ │
//! │  └───────────────────┘  └───────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  Created empty at startup, never persisted.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tally_core::{Shift, Tally};

use super::notify::Notifications;

/// Everything that changes while the counter runs.
#[derive(Debug, Default)]
pub struct CounterState {
    /// Counts for all three shifts.
    pub tally: Tally,

    /// Shift the denomination inputs are bound to.
    pub active_shift: Shift,

    /// Recent user-facing messages.
    pub notifications: Notifications,
}

impl CounterState {
    /// Empty tally, first shift active, no notifications.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_on_first_shift() {
        let state = CounterState::new();
        assert!(state.tally.is_empty());
        assert_eq!(state.active_shift, Shift::First);
        assert!(state.notifications.is_empty());
    }
}
