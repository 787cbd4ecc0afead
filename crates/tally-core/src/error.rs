//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tally-core errors (this file)                                         │
//! │  └── CoreError        - Unknown shift / denomination identifiers       │
//! │                                                                         │
//! │  tally-pdf errors (separate crate)                                     │
//! │  └── PdfError         - Font registration, serialization               │
//! │                                                                         │
//! │  Counter app errors                                                    │
//! │  └── ApiError         - What the UI shows as a notification            │
//! │                                                                         │
//! │  Flow: CoreError / PdfError / PrintError → ApiError → Notification     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity input never produces an error: bad input is coerced to zero
//! (see [`crate::validation`]). Totals and layouts are infallible.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These only occur when an identifier coming from outside the type system
/// (a config key, a command argument) does not name a known shift or
/// denomination.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Shift label did not match any of the three shifts.
    ///
    /// ## When This Occurs
    /// - A config file names a shift such as `"fourth"`
    /// - A command argument carries a stale or misspelled label
    #[error("Unknown shift: {0}")]
    UnknownShift(String),

    /// Face value is not part of the fixed denomination set.
    #[error("Unknown denomination: {0}")]
    UnknownDenomination(u32),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownShift("fourth".to_string());
        assert_eq!(err.to_string(), "Unknown shift: fourth");

        let err = CoreError::UnknownDenomination(2000);
        assert_eq!(err.to_string(), "Unknown denomination: 2000");
    }
}
