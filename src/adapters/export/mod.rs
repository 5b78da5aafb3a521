//! Summary renderers for each export format.

mod csv_renderer;
mod json_renderer;
mod markdown_renderer;

use std::sync::Arc;

use crate::ports::SummaryRenderer;

pub use csv_renderer::CsvSummaryRenderer;
pub use json_renderer::JsonSummaryRenderer;
pub use markdown_renderer::MarkdownSummaryRenderer;

/// One renderer per supported export format.
pub fn standard_renderers() -> Vec<Arc<dyn SummaryRenderer>> {
    vec![
        Arc::new(JsonSummaryRenderer::new()),
        Arc::new(MarkdownSummaryRenderer::new()),
        Arc::new(CsvSummaryRenderer::new()),
    ]
}
