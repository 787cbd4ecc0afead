//! # API Error Type
//!
//! Unified error type for counter commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Cash Counter                       │
//! │                                                                         │
//! │  Key press                   Rust Backend                               │
//! │  ─────────                   ────────────                               │
//! │                                                                         │
//! │  'e' (export)                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Painting Error? ─── PdfError::Serialize("...") ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Printer Error? ─── PrintError::Unavailable ───── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  UI pushes an error notification:                                       │
//! │    "Print Error: Unable to open print dialog."                          │
//! │  The tally itself is never touched by a failed command.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tally_core::CoreError;
use tally_pdf::PdfError;

use crate::print::PrintError;

/// API error returned from counter commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "PRINT_UNAVAILABLE",
///   "message": "Unable to open print dialog."
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown shift or denomination identifier
    ValidationError,

    /// Document could not be produced
    ExportError,

    /// Host print facility refused or is missing
    PrintUnavailable,

    /// Print job was handed over but failed
    PrintFailed,

    /// File system operation failed
    IoError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Notification title for this failure.
    pub fn title(&self) -> &'static str {
        match self.code {
            ErrorCode::ValidationError => "Invalid Input",
            ErrorCode::ExportError | ErrorCode::IoError => "Export Error",
            ErrorCode::PrintUnavailable | ErrorCode::PrintFailed => "Print Error",
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts painting errors to API errors.
impl From<PdfError> for ApiError {
    fn from(err: PdfError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!("PDF generation failed: {}", err);
        ApiError::new(ErrorCode::ExportError, "Unable to generate the PDF report.")
    }
}

/// Converts print errors to API errors.
impl From<PrintError> for ApiError {
    fn from(err: PrintError) -> Self {
        match err {
            PrintError::Unavailable { .. } => {
                tracing::error!("Print surface unavailable: {}", err);
                ApiError::new(ErrorCode::PrintUnavailable, "Unable to open print dialog.")
            }
            PrintError::Failed { .. } | PrintError::Io(_) => {
                tracing::error!("Print job failed: {}", err);
                ApiError::new(ErrorCode::PrintFailed, err.to_string())
            }
        }
    }
}

/// Converts file system errors to API errors.
impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("I/O error: {}", err);
        ApiError::new(ErrorCode::IoError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_is_validation() {
        let err = ApiError::from(CoreError::UnknownShift("4th".to_string()));
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Unknown shift: 4th");
        assert_eq!(err.title(), "Invalid Input");
    }

    #[test]
    fn test_unavailable_printer_message() {
        let err = ApiError::from(PrintError::Unavailable {
            command: "lp".to_string(),
            reason: "not found".to_string(),
        });
        assert_eq!(err.code, ErrorCode::PrintUnavailable);
        assert_eq!(err.message, "Unable to open print dialog.");
        assert_eq!(err.title(), "Print Error");
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = ApiError::new(ErrorCode::ExportError, "disk full");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "EXPORT_ERROR");
        assert_eq!(json["message"], "disk full");
    }

    #[test]
    fn test_display() {
        let err = ApiError::validation("Unknown shift: 4th");
        assert_eq!(err.to_string(), "[ValidationError] Unknown shift: 4th");
    }
}
