//! Rendering of validation outcomes for callers.
//!
//! The engine itself never prints or logs a verdict; it returns
//! `Result<(), ValidationError>`. These helpers turn that outcome into a
//! serializable [`ValidationReport`] and render it as plain text or JSON
//! for whatever reporting layer sits on top.
//!
//! # Examples
//!
//! ```rust
//! use shot_guard::formatters::{ReportFormatter, TextFormatter, ValidationReport};
//! use shot_guard::prelude::*;
//!
//! let validator = Validator::new();
//! let outcome = validator.validate("C1 V1 S1 alice 0.9\n".as_bytes());
//! let report = ValidationReport::from_outcome(&outcome);
//!
//! let rendered = TextFormatter.format(&report).unwrap();
//! assert_eq!(rendered, "PASSED");
//! ```

use crate::error::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// Whether a validation run passed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Every applicable check passed.
    Passed,
    /// A check was violated or an input file was malformed.
    Failed,
}

/// A serializable summary of one validation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Pass/fail status of the run.
    pub status: ReportStatus,
    /// Human-readable reason for a failure, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// 1-indexed line number of the failure, when the violated rule is
    /// tied to file order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl ValidationReport {
    /// Creates a passing report.
    pub fn passed() -> Self {
        Self {
            status: ReportStatus::Passed,
            reason: None,
            line: None,
        }
    }

    /// Creates a failing report from a validation error.
    pub fn failed(error: &ValidationError) -> Self {
        Self {
            status: ReportStatus::Failed,
            reason: Some(error.to_string()),
            line: error.line(),
        }
    }

    /// Creates a report from a validation outcome.
    pub fn from_outcome(outcome: &Result<()>) -> Self {
        match outcome {
            Ok(()) => Self::passed(),
            Err(error) => Self::failed(error),
        }
    }

    /// Returns true if the run passed.
    pub fn is_passed(&self) -> bool {
        self.status == ReportStatus::Passed
    }
}

/// Trait for rendering a validation report into an output format.
pub trait ReportFormatter {
    /// Renders the report as a string.
    fn format(&self, report: &ValidationReport) -> Result<String>;
}

/// Renders a report as a single human-readable line.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        Ok(match &report.reason {
            Some(reason) => format!("FAILED: {reason}"),
            None => "PASSED".to_string(),
        })
    }
}

/// Renders a report as JSON for machine consumption.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a compact JSON formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pretty-printing JSON formatter.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.map_err(|e| ValidationError::Serialization(e.to_string()))
    }
}
