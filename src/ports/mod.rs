//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Active and completed session records
//! - `SummaryRenderer` - Export of session summaries into one format
//! - `StimulusSource` - Random stimulus words (defined alongside the
//!   technique catalog, re-exported here)

mod session_store;
mod summary_renderer;

pub use crate::domain::technique::{StimulusDraw, StimulusSource};
pub use session_store::{SessionMutation, SessionStore};
pub use summary_renderer::{ExportError, ExportFormat, ExportedSession, SummaryRenderer};
