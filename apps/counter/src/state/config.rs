//! # Counter Configuration
//!
//! Presentation and output settings loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line flags (highest priority)                              │
//! │     --output-dir ./reports   --log-file ./counter.log                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/cash-counter/counter.toml (Linux)                        │
//! │     ~/Library/Application Support/com.tally.cash-counter/counter.toml  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     ₱ / PHP, reports in the current directory, printing through lp     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Configuration never seeds or stores tally state.
//!
//! ## Configuration File Format
//! ```toml
//! [currency]
//! code = "PHP"
//! symbol = "₱"
//! pdf_prefix = "PHP "
//!
//! [report]
//! output_dir = "/home/cashier/reports"
//!
//! [report.staff]
//! first = "Ana"
//! second = "Ben"
//!
//! [print]
//! command = "lp"
//! args = ["-d", "front-desk"]
//! format = "text"
//!
//! [logging]
//! file = "/var/log/cash-counter.log"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use tally_core::report::ReportOptions;
use tally_core::{Money, DEFAULT_CURRENCY_CODE, DEFAULT_CURRENCY_SYMBOL};
use tally_pdf::PaintOptions;

const CONFIG_FILE_NAME: &str = "counter.toml";
const LOG_FILE_NAME: &str = "cash-counter.log";

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file.
    #[error("Config file error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

// =============================================================================
// Sections
// =============================================================================

/// Currency presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    /// ISO 4217 code.
    #[serde(default = "default_currency_code")]
    pub code: String,

    /// Symbol placed in front of amounts.
    #[serde(default = "default_currency_symbol")]
    pub symbol: String,

    /// Replacement for the symbol in PDF text, where the builtin fonts
    /// cannot encode it.
    #[serde(default = "default_pdf_prefix")]
    pub pdf_prefix: String,
}

fn default_currency_code() -> String {
    DEFAULT_CURRENCY_CODE.to_string()
}

fn default_currency_symbol() -> String {
    DEFAULT_CURRENCY_SYMBOL.to_string()
}

fn default_pdf_prefix() -> String {
    format!("{} ", DEFAULT_CURRENCY_CODE)
}

impl Default for CurrencySettings {
    fn default() -> Self {
        CurrencySettings {
            code: default_currency_code(),
            symbol: default_currency_symbol(),
            pdf_prefix: default_pdf_prefix(),
        }
    }
}

/// Optional staff name per shift, printed in report headings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffNames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub third: Option<String>,
}

/// Report output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Where exported PDFs are written. Default: current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    #[serde(default)]
    pub staff: StaffNames,
}

/// Document form handed to the print command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintFormat {
    /// Plain text lines, for `lp` and line printers.
    #[default]
    Text,
    /// Standalone HTML page, for commands that render HTML.
    Html,
}

/// Host print facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintSettings {
    /// Command receiving the print view on stdin.
    #[serde(default = "default_print_command")]
    pub command: String,

    /// Extra arguments, e.g. `["-d", "front-desk"]`.
    #[serde(default)]
    pub args: Vec<String>,

    /// `text` (default) or `html`.
    #[serde(default)]
    pub format: PrintFormat,
}

fn default_print_command() -> String {
    "lp".to_string()
}

impl Default for PrintSettings {
    fn default() -> Self {
        PrintSettings {
            command: default_print_command(),
            args: Vec::new(),
            format: PrintFormat::default(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path. Default: platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete counter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterConfig {
    #[serde(default)]
    pub currency: CurrencySettings,

    #[serde(default)]
    pub report: ReportSettings,

    #[serde(default)]
    pub print: PrintSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl CounterConfig {
    /// Loads configuration from file and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`counter.toml`)
    ///
    /// Command line overrides are applied by the caller afterwards.
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading counter config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.currency.symbol.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "currency.symbol must not be empty".into(),
            ));
        }

        let code = &self.currency.code;
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Invalid(format!(
                "currency.code must be a three-letter ISO code, got: '{}'",
                code
            )));
        }

        if self.print.command.trim().is_empty() {
            return Err(ConfigError::Invalid("print.command must not be empty".into()));
        }

        Ok(())
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Directory exported reports are written to.
    pub fn output_dir(&self) -> &Path {
        self.report
            .output_dir
            .as_deref()
            .unwrap_or_else(|| Path::new("."))
    }

    /// Log file path, falling back to the platform data directory and then
    /// the system temp directory.
    pub fn log_file(&self) -> PathBuf {
        if let Some(file) = &self.logging.file {
            return file.clone();
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(LOG_FILE_NAME))
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }

    /// Formats an amount with the configured symbol.
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format(&self.currency.symbol)
    }

    /// Options for laying out the breakdown report.
    pub fn report_options(&self) -> ReportOptions {
        let staff = &self.report.staff;
        ReportOptions {
            currency_symbol: self.currency.symbol.clone(),
            staff: [staff.first.clone(), staff.second.clone(), staff.third.clone()],
        }
    }

    /// Options for painting the breakdown document.
    pub fn paint_options(&self) -> PaintOptions {
        PaintOptions {
            currency_prefix: self.currency.pdf_prefix.clone(),
            ..PaintOptions::default()
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "tally", "cash-counter")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Shift;

    #[test]
    fn test_defaults() {
        let config = CounterConfig::default();
        assert_eq!(config.currency.code, "PHP");
        assert_eq!(config.currency.symbol, "₱");
        assert_eq!(config.currency.pdf_prefix, "PHP ");
        assert_eq!(config.print.command, "lp");
        assert_eq!(config.print.format, PrintFormat::Text);
        assert_eq!(config.output_dir(), Path::new("."));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_currency() {
        let config = CounterConfig::default();
        assert_eq!(config.format_currency(Money::from_major(2300)), "₱2,300.00");
        assert_eq!(config.format_currency(Money::zero()), "₱0.00");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: CounterConfig = toml::from_str(
            r#"
            [report.staff]
            first = "Ana"

            [print]
            args = ["-d", "front-desk"]
            "#,
        )
        .unwrap();

        assert_eq!(config.currency, CurrencySettings::default());
        assert_eq!(config.print.command, "lp");
        assert_eq!(config.print.args, vec!["-d", "front-desk"]);

        let options = config.report_options();
        assert_eq!(options.staff_for(Shift::First), Some("Ana"));
        assert_eq!(options.staff_for(Shift::Second), None);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.toml");
        std::fs::write(
            &path,
            r#"
            [report]
            output_dir = "/srv/reports"

            [report.staff]
            third = "Cora"

            [print]
            command = "lpr"
            format = "html"

            [logging]
            file = "/tmp/cash-counter.log"
            "#,
        )
        .unwrap();

        let loaded = CounterConfig::load(Some(path)).unwrap();
        assert_eq!(loaded.output_dir(), Path::new("/srv/reports"));
        assert_eq!(loaded.report.staff.third.as_deref(), Some("Cora"));
        assert_eq!(loaded.print.command, "lpr");
        assert_eq!(loaded.print.format, PrintFormat::Html);
        assert_eq!(loaded.log_file(), PathBuf::from("/tmp/cash-counter.log"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = CounterConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(loaded, CounterConfig::default());
    }

    #[test]
    fn test_validation_rejects_empty_symbol() {
        let mut config = CounterConfig::default();
        config.currency.symbol = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validation_rejects_bad_code_and_command() {
        let mut config = CounterConfig::default();
        config.currency.code = "peso".to_string();
        assert!(config.validate().is_err());

        let mut config = CounterConfig::default();
        config.print.command = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.toml");

        std::fs::write(&path, "[currency]\nsymbol = \"\"\n").unwrap();
        assert!(matches!(
            CounterConfig::load(Some(path.clone())),
            Err(ConfigError::Invalid(_))
        ));

        std::fs::write(&path, "[currency\n").unwrap();
        assert!(matches!(
            CounterConfig::load(Some(path)),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_paint_options_use_prefix() {
        let mut config = CounterConfig::default();
        config.currency.pdf_prefix = "P".to_string();
        assert_eq!(config.paint_options().currency_prefix, "P");
    }
}
