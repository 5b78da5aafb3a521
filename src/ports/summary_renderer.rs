//! Summary Renderer Port - Export format interface.
//!
//! Renderers turn a [`SessionSummary`] into one textual representation.
//! Every renderer consumes the same summary, so formats never diverge in
//! content.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::analytics::SessionSummary;

/// Port for rendering a session summary.
///
/// # Contract
///
/// Implementations must:
/// - Be deterministic for a given summary
/// - Include every idea in the summary
pub trait SummaryRenderer: Send + Sync {
    /// The format this renderer produces.
    fn format(&self) -> ExportFormat;

    /// Renders the summary.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::RenderFailed` if serialization fails.
    fn render(&self, summary: &SessionSummary) -> Result<String, ExportError>;
}

/// Export formats supported for sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Structured JSON document.
    Structured,
    /// Human-readable Markdown narrative.
    Narrative,
    /// One CSV row per idea.
    Tabular,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Structured => "application/json",
            ExportFormat::Narrative => "text/markdown; charset=utf-8",
            ExportFormat::Tabular => "text/csv; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Structured => "json",
            ExportFormat::Narrative => "md",
            ExportFormat::Tabular => "csv",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Structured => write!(f, "structured"),
            ExportFormat::Narrative => write!(f, "narrative"),
            ExportFormat::Tabular => write!(f, "tabular"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "structured" | "json" => Ok(ExportFormat::Structured),
            "narrative" | "markdown" | "md" => Ok(ExportFormat::Narrative),
            "tabular" | "csv" => Ok(ExportFormat::Tabular),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Rendered export with content and metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedSession {
    pub format: ExportFormat,
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    pub content: String,
}

impl ExportedSession {
    pub fn new(content: String, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            format,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            content,
        }
    }
}

/// Errors that can occur during session export.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// No active or completed session has this id.
    #[error("Unknown session: {0}")]
    UnknownSession(String),

    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Rendering the summary failed.
    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl ExportError {
    /// Create a render failure error.
    pub fn render_failed(reason: impl Into<String>) -> Self {
        Self::RenderFailed(reason.into())
    }
}
