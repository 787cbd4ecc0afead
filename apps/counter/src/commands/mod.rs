//! # Commands Module
//!
//! The operations the UI invokes.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── tally.rs    ◄─── get_tally, set_quantity, set_active_shift, clear_shift
//! └── report.rs   ◄─── export_report, print_shift
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  key press ('5', '0', Enter...)                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn set_quantity(                                                       │
//! │      state: &mut CounterState,   ◄── borrowed from the UI loop          │
//! │      config: &CounterConfig,     ◄── read-only                          │
//! │      denomination: u32,                                                 │
//! │      input: &str,                                                       │
//! │  ) -> Result<TallyResponse, ApiError>                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  UI redraws; an Err becomes an error notification                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod report;
pub mod tally;
