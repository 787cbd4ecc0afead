//! # Report Commands
//!
//! Exporting the breakdown document and printing the active shift.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  export_report(date)                                                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  BreakdownReport::build ──► tally_pdf::render ──► bytes in memory       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  <output_dir>/cash-breakdown-2024-03-05.pdf.part ──rename──► .pdf       │
//! │                                                                         │
//! │  Any failure before the rename leaves no report file behind.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info, warn};

use tally_core::{BreakdownReport, PrintView, Shift};

use crate::error::ApiError;
use crate::print::{PrintJob, PrintSurface};
use crate::state::{CounterConfig, CounterState};

/// Result of a successful export.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: usize,
    pub report: BreakdownReport,
}

/// Result of a successful print.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintResponse {
    pub shift: Shift,
    pub title: String,
    pub lines: usize,
    pub surface: String,
}

/// Writes the breakdown PDF for `date` into the configured output directory.
///
/// ## Returns
/// Path and size of the written file plus the laid-out report.
pub fn export_report(
    state: &mut CounterState,
    config: &CounterConfig,
    date: NaiveDate,
) -> Result<ExportResponse, ApiError> {
    debug!(%date, "export_report command");

    let report = BreakdownReport::build(&state.tally, date, &config.report_options());
    let bytes = tally_pdf::render(&report, &config.paint_options())?;

    let dir = config.output_dir();
    std::fs::create_dir_all(dir)?;

    let file_name = report.file_name();
    let path = dir.join(&file_name);
    let partial = dir.join(format!("{}.part", file_name));

    if let Err(err) = std::fs::write(&partial, &bytes) {
        let _ = std::fs::remove_file(&partial);
        return Err(err.into());
    }
    if let Err(err) = std::fs::rename(&partial, &path) {
        warn!(?partial, "Could not move report into place");
        let _ = std::fs::remove_file(&partial);
        return Err(err.into());
    }

    info!(?path, bytes = bytes.len(), tables = report.tables.len(), "Breakdown report exported");
    state.notifications.info(
        "PDF Generated",
        format!("Cash breakdown saved to {}", path.display()),
    );

    Ok(ExportResponse {
        path,
        file_name,
        bytes: bytes.len(),
        report,
    })
}

/// Sends the active shift's print view to the print surface.
///
/// ## Failure
/// If the surface refuses the job nothing is printed and the error is
/// returned for the caller to show.
pub fn print_shift(
    state: &mut CounterState,
    config: &CounterConfig,
    surface: &mut dyn PrintSurface,
    generated_at: NaiveDateTime,
) -> Result<PrintResponse, ApiError> {
    let shift = state.active_shift;
    debug!(%shift, surface = %surface.name(), "print_shift command");

    let view = PrintView::build(&state.tally, shift, generated_at, &config.currency.symbol);
    let job = PrintJob::from_view(&view, config.print.format);
    surface.submit(&job)?;

    info!(%shift, lines = view.lines.len(), "Shift print view sent");
    state.notifications.info(
        "Print Ready",
        format!("Print job sent for {} shift.", shift),
    );

    Ok(PrintResponse {
        shift,
        title: job.title,
        lines: view.lines.len(),
        surface: surface.name().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tally::{set_active_shift, set_quantity};
    use crate::error::ErrorCode;
    use crate::print::testing::RecordingSurface;
    use crate::state::PrintFormat;
    use tally_core::TableKind;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    fn populated() -> (CounterState, CounterConfig) {
        let mut state = CounterState::new();
        let config = CounterConfig::default();
        set_quantity(&mut state, &config, 1000, "2").unwrap();
        set_quantity(&mut state, &config, 100, "3").unwrap();
        set_active_shift(&mut state, &config, "2nd").unwrap();
        set_quantity(&mut state, &config, 500, "1").unwrap();
        (state, config)
    }

    #[test]
    fn test_export_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut config) = populated();
        config.report.output_dir = Some(dir.path().join("reports"));

        let response = export_report(&mut state, &config, date()).unwrap();

        assert_eq!(response.file_name, "cash-breakdown-2024-03-05.pdf");
        assert_eq!(response.path, dir.path().join("reports").join(&response.file_name));

        let bytes = std::fs::read(&response.path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert_eq!(bytes.len(), response.bytes);
        assert!(!dir.path().join("reports").join("cash-breakdown-2024-03-05.pdf.part").exists());

        let kinds: Vec<TableKind> = response.report.tables.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TableKind::Shift(Shift::First),
                TableKind::Shift(Shift::Second),
                TableKind::Aggregate
            ]
        );
        assert_eq!(state.notifications.latest().unwrap().title, "PDF Generated");
    }

    #[test]
    fn test_export_twice_same_content() {
        let dir = tempfile::tempdir().unwrap();
        let (mut state, mut config) = populated();
        config.report.output_dir = Some(dir.path().to_path_buf());

        let first = export_report(&mut state, &config, date()).unwrap();
        let second = export_report(&mut state, &config, date()).unwrap();

        assert_eq!(first.report, second.report);
        assert_eq!(first.report.draw_ops(), second.report.draw_ops());
    }

    #[test]
    fn test_export_into_file_path_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();

        let (mut state, mut config) = populated();
        config.report.output_dir = Some(blocker);

        let err = export_report(&mut state, &config, date()).unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(state.notifications.is_empty());
    }

    #[test]
    fn test_print_sends_active_shift() {
        let (mut state, config) = populated();
        set_active_shift(&mut state, &config, "1st").unwrap();
        let mut surface = RecordingSurface::default();
        let at = date().and_hms_opt(14, 30, 0).unwrap();

        let response = print_shift(&mut state, &config, &mut surface, at).unwrap();

        assert_eq!(response.title, "Cash Count - 1st Shift");
        assert_eq!(response.lines, 2);
        assert_eq!(surface.jobs.len(), 1);

        let text = &surface.jobs[0].body;
        assert!(text.contains("₱1k | Qty: 2 | ₱2,000.00"));
        assert!(text.contains("₱100 | Qty: 3 | ₱300.00"));
        assert!(!text.contains("Qty: 0"));
        assert!(text.contains("1st Shift Total: ₱2,300.00"));
        assert!(text.contains("Total Cash Denomination: ₱2,800.00"));
        assert_eq!(state.notifications.latest().unwrap().title, "Print Ready");
    }

    #[test]
    fn test_print_uses_configured_format() {
        let (mut state, mut config) = populated();
        config.print.format = PrintFormat::Html;
        let mut surface = RecordingSurface::default();
        let at = date().and_hms_opt(14, 30, 0).unwrap();

        print_shift(&mut state, &config, &mut surface, at).unwrap();

        let job = &surface.jobs[0];
        assert_eq!(job.format, PrintFormat::Html);
        assert!(job.body.starts_with("<!DOCTYPE html>"));
        assert!(job.body.contains("Cash Count - 2nd Shift"));
    }

    #[test]
    fn test_print_unavailable_prints_nothing() {
        let (mut state, config) = populated();
        let mut surface = RecordingSurface::refusing();
        let at = date().and_hms_opt(14, 30, 0).unwrap();

        let err = print_shift(&mut state, &config, &mut surface, at).unwrap_err();

        assert_eq!(err.code, ErrorCode::PrintUnavailable);
        assert!(surface.jobs.is_empty());
        assert!(state.notifications.is_empty());
    }
}
