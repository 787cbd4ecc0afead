//! # Cash Counter Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cash Counter                                     │
//! │                                                                         │
//! │  main.rs ────► Parses the command line                                 │
//! │                                                                         │
//! │  lib.rs ─────► Loads config, starts logging, runs the terminal UI      │
//! │                                                                         │
//! │  commands/ ──► set_quantity, clear_shift, export_report, print_shift   │
//! │                                                                         │
//! │  state/ ─────► CounterState, CounterConfig, Notifications              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cash-counter")]
#[command(about = "Count cash by denomination across three shifts")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for exported PDF reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tally_counter_lib::run(tally_counter_lib::Overrides {
        config: args.config,
        output_dir: args.output_dir,
        log_file: args.log_file,
        verbose: args.verbose,
    })
}
