//! # tally-core: Pure Logic for the Cash Counter
//!
//! This crate is the **heart** of the cash counter. It contains all counting
//! and report logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cash Counter Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal UI (ratatui)                         │   │
//! │  │    Shift Tabs ──► Denomination Inputs ──► Totals ──► Actions    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key events                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Counter Commands                             │   │
//! │  │    set_quantity, clear_shift, export_report, print_shift        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   count   │  │  report   │  │   │
//! │  │   │  Shift    │  │   Money   │  │   Tally   │  │  layout   │  │   │
//! │  │   │  Denom.   │  │  format   │  │  totals   │  │  print    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO FILES • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-pdf (Painting Adapter)                 │   │
//! │  │              DrawOp list ──► PDF bytes                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Closed enumerations (Denomination, Shift)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`count`] - Shift counts, the three-shift tally and its totals
//! - [`validation`] - Quantity input coercion
//! - [`report`] - Fixed-geometry breakdown layout as drawing operations
//! - [`print`] - Simplified single-shift print view
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Denomination, Shift, Tally};
//!
//! let mut tally = Tally::new();
//! tally.set_quantity(Shift::First, Denomination::Thousand, 2);
//! tally.set_quantity(Shift::First, Denomination::Hundred, 3);
//! tally.set_quantity(Shift::Second, Denomination::FiveHundred, 1);
//!
//! assert_eq!(tally.shift_total(Shift::First).major(), 2300);
//! assert_eq!(tally.grand_total().to_string(), "₱2,800.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod count;
pub mod error;
pub mod money;
pub mod print;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use count::{grand_total, shift_total, AggregateCount, CountLine, Quantity, ShiftCount, Tally};
pub use error::{CoreError, CoreResult};
pub use money::Money;
pub use print::{PrintLine, PrintView};
pub use report::{
    Align, BreakdownReport, BreakdownRow, BreakdownTable, DrawOp, ReportOptions, TableKind, Weight,
};
pub use types::{Denomination, Shift};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used when nothing else is configured (Philippine peso).
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₱";

/// ISO 4217 code matching [`DEFAULT_CURRENCY_SYMBOL`].
pub const DEFAULT_CURRENCY_CODE: &str = "PHP";
