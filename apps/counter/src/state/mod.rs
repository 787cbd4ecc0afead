//! # State Module
//!
//! Application state and configuration for the counter.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      UI Loop (ui.rs)                            │   │
//! │  │  owns CounterState, CounterConfig, Box<dyn PrintSurface>        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │          ┌──────────────────┼──────────────────┐                       │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────────┐  ┌──────────────────┐          │
//! │  │ CounterState │  │  Notifications   │  │  CounterConfig   │          │
//! │  │  &mut per    │  │  (inside state)  │  │  read-only after │          │
//! │  │  command     │  │                  │  │  startup         │          │
//! │  └──────────────┘  └──────────────────┘  └──────────────────┘          │
//! │                                                                         │
//! │  Single-threaded: every command runs to completion before the next     │
//! │  key event, so plain `&mut` borrows replace locks.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod notify;
mod tally;

pub use config::{
    ConfigError, ConfigResult, CounterConfig, CurrencySettings, LoggingSettings, PrintFormat,
    PrintSettings, ReportSettings, StaffNames,
};
pub use notify::{Notification, NotificationKind, Notifications, NOTIFICATION_TTL};
pub use tally::CounterState;
