//! # Cash Counter Library
//!
//! Core library for the cash counter terminal application.
//! This is the main entry point that loads configuration and runs the UI.
//!
//! ## Module Organization
//! ```text
//! tally_counter_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── tally.rs    ◄─── CounterState (tally, active shift, notifications)
//! │   ├── notify.rs   ◄─── Expiring notifications
//! │   └── config.rs   ◄─── CounterConfig (TOML)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── tally.rs    ◄─── Quantity, shift and clear commands
//! │   └── report.rs   ◄─── Export and print commands
//! ├── print.rs        ◄─── PrintSurface trait, lp spooler
//! ├── ui.rs           ◄─── ratatui front end
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod print;
pub mod state;
pub mod ui;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use print::SpoolerSurface;
use state::CounterConfig;
use ui::App;

/// Command line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Explicit config file instead of the platform default.
    pub config: Option<PathBuf>,

    /// Directory for exported reports.
    pub output_dir: Option<PathBuf>,

    /// Log file path.
    pub log_file: Option<PathBuf>,

    /// Log at debug level regardless of `RUST_LOG`.
    pub verbose: bool,
}

/// Runs the counter until the user quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • --config path or platform config dir                              │
/// │     • Bad file: defaults, warning logged once logging is up             │
/// │                                                                         │
/// │  2. Apply Command Line Overrides ─────────────────────────────────────► │
/// │                                                                         │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • File only: the terminal belongs to the UI                         │
/// │     • Default: info,tally=debug, can be overridden with RUST_LOG        │
/// │                                                                         │
/// │  4. Initialize State & Print Surface ─────────────────────────────────► │
/// │     • Empty tally, 1st shift active                                     │
/// │     • SpoolerSurface from [print] settings                              │
/// │                                                                         │
/// │  5. Run Terminal UI ──────────────────────────────────────────────────► │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(overrides: Overrides) -> Result<()> {
    let (mut config, load_error) = match CounterConfig::load(overrides.config.clone()) {
        Ok(config) => (config, None),
        Err(err) => (CounterConfig::default(), Some(err)),
    };
    apply_overrides(&mut config, &overrides);

    let log_file = config.log_file();
    init_tracing(&log_file, overrides.verbose)?;

    info!(?log_file, "Starting Cash Counter");
    if let Some(err) = load_error {
        warn!("Failed to load counter config: {}. Using defaults.", err);
    }
    info!(output_dir = ?config.output_dir(), print_command = %config.print.command, "Configuration ready");

    let surface = SpoolerSurface::new(config.print.command.clone(), config.print.args.clone());
    let mut app = App::new(config, Box::new(surface));

    ui::run_ui(&mut app)
}

/// Applies command line flags to a loaded configuration.
pub fn apply_overrides(config: &mut CounterConfig, overrides: &Overrides) {
    if let Some(dir) = &overrides.output_dir {
        config.report.output_dir = Some(dir.clone());
    }
    if let Some(file) = &overrides.log_file {
        config.logging.file = Some(file.clone());
    }
}

/// Initializes the tracing subscriber, writing to `log_file`.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO, DEBUG for tally crates
fn init_tracing(log_file: &Path, verbose: bool) -> Result<()> {
    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("opening log file {}", log_file.display()))?;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tally=debug"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let mut config = CounterConfig::default();
        config.report.output_dir = Some(PathBuf::from("/from/file"));

        let overrides = Overrides {
            output_dir: Some(PathBuf::from("/from/flag")),
            log_file: Some(PathBuf::from("/tmp/counter.log")),
            ..Overrides::default()
        };
        apply_overrides(&mut config, &overrides);

        assert_eq!(config.output_dir(), Path::new("/from/flag"));
        assert_eq!(config.log_file(), PathBuf::from("/tmp/counter.log"));
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = CounterConfig::default();
        apply_overrides(&mut config, &Overrides::default());
        assert_eq!(config, CounterConfig::default());
    }
}
