//! # Print Surface
//!
//! Hands a print view to the host print facility.
//!
//! ```text
//! ┌──────────────┐   PrintJob    ┌──────────────────┐   stdin    ┌──────┐
//! │ print_shift  │──────────────►│  SpoolerSurface  │───────────►│  lp  │
//! │  (command)   │               │  (PrintSurface)  │            └──────┘
//! └──────────────┘               └──────────────────┘
//!                                 spawn refused ──► PrintError::Unavailable
//! ```

use std::io::Write;
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::{debug, info};

use tally_core::PrintView;

use crate::state::PrintFormat;

/// Result type alias for print operations.
pub type PrintResult<T> = Result<T, PrintError>;

/// Print failures.
#[derive(Debug, Error)]
pub enum PrintError {
    /// The print facility could not be opened at all.
    #[error("Print command '{command}' unavailable: {reason}")]
    Unavailable { command: String, reason: String },

    /// The print command ran but reported failure.
    #[error("Print command '{command}' exited with {status}")]
    Failed { command: String, status: String },

    /// Writing the job to the print command failed.
    #[error("Failed to send print job: {0}")]
    Io(#[from] std::io::Error),
}

/// A rendered print job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintJob {
    pub title: String,
    pub format: PrintFormat,
    pub body: String,
}

impl PrintJob {
    /// Renders a print view in the configured document form.
    pub fn from_view(view: &PrintView, format: PrintFormat) -> Self {
        let body = match format {
            PrintFormat::Text => view.to_text(),
            PrintFormat::Html => view.to_html(),
        };
        PrintJob {
            title: view.title(),
            format,
            body,
        }
    }
}

/// Destination for print jobs.
pub trait PrintSurface {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Submits one job. Either the whole job is accepted or an error is
    /// returned.
    fn submit(&mut self, job: &PrintJob) -> PrintResult<()>;
}

/// Spools jobs through a host command such as `lp`, body on stdin.
#[derive(Debug, Clone)]
pub struct SpoolerSurface {
    command: String,
    args: Vec<String>,
}

impl SpoolerSurface {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        SpoolerSurface {
            command: command.into(),
            args,
        }
    }
}

impl PrintSurface for SpoolerSurface {
    fn name(&self) -> &str {
        &self.command
    }

    fn submit(&mut self, job: &PrintJob) -> PrintResult<()> {
        debug!(command = %self.command, args = ?self.args, title = %job.title, format = ?job.format, "Spawning print command");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| PrintError::Unavailable {
                command: self.command.clone(),
                reason: e.to_string(),
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(job.body.as_bytes()) {
                // reap the child before reporting
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(PrintError::Io(err));
            }
        }

        let status = child.wait()?;
        if !status.success() {
            return Err(PrintError::Failed {
                command: self.command.clone(),
                status: status.to_string(),
            });
        }

        info!(command = %self.command, title = %job.title, "Print job spooled");
        Ok(())
    }
}

/// Test doubles shared by command and UI tests.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Records submitted jobs, or refuses every job when `unavailable`.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub jobs: Vec<PrintJob>,
        pub unavailable: bool,
    }

    impl RecordingSurface {
        pub fn refusing() -> Self {
            RecordingSurface {
                jobs: Vec::new(),
                unavailable: true,
            }
        }
    }

    impl PrintSurface for RecordingSurface {
        fn name(&self) -> &str {
            "recording"
        }

        fn submit(&mut self, job: &PrintJob) -> PrintResult<()> {
            if self.unavailable {
                return Err(PrintError::Unavailable {
                    command: "recording".to_string(),
                    reason: "refused".to_string(),
                });
            }
            self.jobs.push(job.clone());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tally_core::{Denomination, Shift, Tally};

    fn view() -> PrintView {
        let mut tally = Tally::new();
        tally.set_quantity(Shift::First, Denomination::Fifty, 2);
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        PrintView::build(&tally, Shift::First, at, "₱")
    }

    fn job() -> PrintJob {
        PrintJob::from_view(&view(), PrintFormat::Text)
    }

    #[test]
    fn test_job_from_view() {
        let job = job();
        assert_eq!(job.title, "Cash Count - 1st Shift");
        assert_eq!(job.format, PrintFormat::Text);
        assert!(job.body.contains("₱50 | Qty: 2 | ₱100.00"));
        assert!(!job.body.contains("<html"));
    }

    #[test]
    fn test_html_job_carries_html_body() {
        let job = PrintJob::from_view(&view(), PrintFormat::Html);
        assert_eq!(job.format, PrintFormat::Html);
        assert!(job.body.starts_with("<!DOCTYPE html>"));
        assert!(job.body.contains("Cash Count - 1st Shift"));
    }

    #[test]
    fn test_missing_command_is_unavailable() {
        let mut surface = SpoolerSurface::new("definitely-not-a-print-command-4711", vec![]);
        let err = surface.submit(&job()).unwrap_err();
        assert!(matches!(err, PrintError::Unavailable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_spooler_streams_text() {
        let mut surface = SpoolerSurface::new("sh", vec!["-c".to_string(), "cat > /dev/null".to_string()]);
        assert_eq!(surface.name(), "sh");
        surface.submit(&job()).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_spooler_receives_html_body() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("job.html");
        let mut surface = SpoolerSurface::new(
            "sh",
            vec!["-c".to_string(), format!("cat > '{}'", out.display())],
        );

        surface
            .submit(&PrintJob::from_view(&view(), PrintFormat::Html))
            .unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
    }

    #[cfg(unix)]
    #[test]
    fn test_closed_stdin_reaps_child() {
        // exits without reading; a large body cannot fit in the pipe buffer
        let mut surface = SpoolerSurface::new("sh", vec!["-c".to_string(), "exit 0".to_string()]);
        let job = PrintJob {
            title: "large".to_string(),
            format: PrintFormat::Text,
            body: "x".repeat(1 << 20),
        };

        let err = surface.submit(&job).unwrap_err();
        assert!(matches!(err, PrintError::Io(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failure() {
        let mut surface = SpoolerSurface::new(
            "sh",
            vec!["-c".to_string(), "cat > /dev/null; exit 3".to_string()],
        );
        let err = surface.submit(&job()).unwrap_err();
        assert!(matches!(err, PrintError::Failed { .. }));
    }
}
