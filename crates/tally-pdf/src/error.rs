//! # PDF Error Types

use thiserror::Error;

/// Result type alias for painting operations.
pub type PdfResult<T> = Result<T, PdfError>;

/// Failures while producing a document.
#[derive(Debug, Error)]
pub enum PdfError {
    /// A builtin font could not be registered with the document.
    #[error("Failed to register font {font}: {reason}")]
    Font { font: &'static str, reason: String },

    /// The finished document could not be serialized.
    #[error("Failed to write PDF: {0}")]
    Serialize(String),
}

impl From<printpdf::Error> for PdfError {
    fn from(err: printpdf::Error) -> Self {
        PdfError::Serialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PdfError::Font {
            font: "Helvetica-Bold",
            reason: "missing".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to register font Helvetica-Bold: missing");
        assert_eq!(
            PdfError::Serialize("eof".to_string()).to_string(),
            "Failed to write PDF: eof"
        );
    }
}
