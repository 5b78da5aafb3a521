//! Structured (JSON) summary renderer.

use crate::domain::analytics::SessionSummary;
use crate::ports::{ExportError, ExportFormat, SummaryRenderer};

/// Renders the summary as pretty-printed JSON.
///
/// Object keys are emitted in sorted order, so output is stable.
#[derive(Debug, Clone, Default)]
pub struct JsonSummaryRenderer;

impl JsonSummaryRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SummaryRenderer for JsonSummaryRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Structured
    }

    fn render(&self, summary: &SessionSummary) -> Result<String, ExportError> {
        serde_json::to_string_pretty(summary).map_err(|e| ExportError::render_failed(e.to_string()))
    }
}
