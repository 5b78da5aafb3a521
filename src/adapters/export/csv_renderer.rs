//! Tabular (CSV) summary renderer.

use crate::domain::analytics::SessionSummary;
use crate::ports::{ExportError, ExportFormat, SummaryRenderer};

const HEADER: [&str; 4] = ["Idea", "Step", "Participant", "Timestamp"];

/// Renders one CSV row per idea.
#[derive(Debug, Clone, Default)]
pub struct CsvSummaryRenderer;

impl CsvSummaryRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl SummaryRenderer for CsvSummaryRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Tabular
    }

    fn render(&self, summary: &SessionSummary) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADER).map_err(render_failed)?;

        for idea in &summary.ideas {
            let step = idea.step.to_string();
            let captured_at = idea.captured_at.to_rfc3339();
            writer
                .write_record([
                    idea.text.as_str(),
                    step.as_str(),
                    idea.participant.as_deref().unwrap_or(""),
                    captured_at.as_str(),
                ])
                .map_err(render_failed)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::render_failed(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ExportError::render_failed(e.to_string()))
    }
}

fn render_failed(err: csv::Error) -> ExportError {
    ExportError::render_failed(err.to_string())
}
