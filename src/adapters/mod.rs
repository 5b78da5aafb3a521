//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - In-process session store
//! - `stimulus` - Random stimulus word source
//! - `export` - Summary renderers (JSON, Markdown, CSV)
//! - `http` - Axum REST API

pub mod export;
pub mod http;
pub mod memory;
pub mod stimulus;

pub use export::{
    standard_renderers, CsvSummaryRenderer, JsonSummaryRenderer, MarkdownSummaryRenderer,
};
pub use http::{api_router, FacilitationAppState};
pub use memory::InMemorySessionStore;
pub use stimulus::RandomWordSource;
