//! # tally-pdf: Breakdown Document Painter
//!
//! Paints a [`tally_core::BreakdownReport`] into PDF bytes with `printpdf`
//! and the builtin Helvetica faces.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use tally_core::{BreakdownReport, Denomination, ReportOptions, Shift, Tally};
//! use tally_pdf::{render, PaintOptions};
//!
//! let mut tally = Tally::new();
//! tally.set_quantity(Shift::First, Denomination::FiveHundred, 4);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
//! let report = BreakdownReport::build(&tally, date, &ReportOptions::default());
//! let bytes = render(&report, &PaintOptions::default()).unwrap();
//!
//! assert!(bytes.starts_with(b"%PDF"));
//! ```

pub mod error;
pub mod painter;

pub use error::{PdfError, PdfResult};
pub use painter::{render, PaintOptions};
