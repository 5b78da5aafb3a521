//! Narrative (Markdown) summary renderer.
//!
//! Produces a human-readable report with fixed sections: header facts,
//! ideas, technique data and, for completed sessions, the completion summary.

use serde_json::Value;

use crate::domain::analytics::SessionSummary;
use crate::ports::{ExportError, ExportFormat, SummaryRenderer};

/// Renders the summary as a Markdown narrative.
#[derive(Debug, Clone, Default)]
pub struct MarkdownSummaryRenderer;

impl MarkdownSummaryRenderer {
    pub fn new() -> Self {
        Self
    }

    fn header(&self, summary: &SessionSummary) -> String {
        let mut section = format!("# Ideation Session: {}\n\n", summary.technique_name);
        section.push_str(&format!("**Session:** `{}`\n", summary.session_id));
        if let Some(parent) = &summary.parent_session_id {
            section.push_str(&format!("**Continued from:** `{}`\n", parent));
        }
        section.push_str(&format!("**Problem:** {}\n", summary.problem_statement));
        section.push_str(&format!(
            "**Participants:** {}\n",
            summary.participants.join(", ")
        ));
        section.push_str(&format!(
            "**Started:** {}\n",
            summary.started_at.to_rfc3339()
        ));
        match &summary.ended_at {
            Some(ended) => section.push_str(&format!("**Ended:** {}\n", ended.to_rfc3339())),
            None => section.push_str("**Ended:** in progress\n"),
        }
        section.push_str(&format!(
            "**Progress:** step {} of {} ({:.1}%)\n",
            summary.current_step, summary.total_steps, summary.completion_percentage
        ));
        section.push_str(&format!(
            "**Duration:** {} minutes\n\n",
            summary.duration_minutes
        ));
        section
    }

    fn ideas(&self, summary: &SessionSummary) -> String {
        let mut section = format!("## Ideas ({})\n\n", summary.idea_count);
        if summary.ideas.is_empty() {
            section.push_str("_No ideas captured yet._\n\n");
            return section;
        }
        for idea in &summary.ideas {
            let attribution = match &idea.participant {
                Some(p) => format!("step {}, {}", idea.step, p),
                None => format!("step {}", idea.step),
            };
            section.push_str(&format!("{}. {} _({})_\n", idea.index, idea.text, attribution));
        }
        section.push('\n');
        section
    }

    fn technique_data(&self, summary: &SessionSummary) -> String {
        if summary.technique_data.is_empty() {
            return String::new();
        }
        let mut section = String::from("## Technique Data\n\n");
        for (key, value) in &summary.technique_data {
            section.push_str(&format!("- **{}:** {}\n", key, inline(value)));
        }
        section.push('\n');
        section
    }

    fn completion(&self, summary: &SessionSummary) -> Result<String, ExportError> {
        let Some(completion) = &summary.completion else {
            return Ok(String::new());
        };
        let value = serde_json::to_value(completion)
            .map_err(|e| ExportError::render_failed(e.to_string()))?;

        let mut section = String::from("## Completion Summary\n\n");
        if let Value::Object(fields) = value {
            for (key, value) in &fields {
                section.push_str(&format!("- **{}:** {}\n", key, inline(value)));
            }
        }
        section.push('\n');
        Ok(section)
    }
}

impl SummaryRenderer for MarkdownSummaryRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Narrative
    }

    fn render(&self, summary: &SessionSummary) -> Result<String, ExportError> {
        let mut doc = self.header(summary);
        doc.push_str(&self.ideas(summary));
        doc.push_str(&self.technique_data(summary));
        doc.push_str(&self.completion(summary)?);
        Ok(doc.trim_end().to_string() + "\n")
    }
}

/// Single-line rendering of a JSON value.
fn inline(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "none".to_string(),
        Value::Array(items) if items.is_empty() => "none".to_string(),
        Value::Array(items) => items.iter().map(inline).collect::<Vec<_>>().join(", "),
        Value::Object(entries) => entries
            .iter()
            .map(|(k, v)| format!("{}: {}", k, inline(v)))
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}
