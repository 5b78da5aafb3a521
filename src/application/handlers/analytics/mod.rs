//! Analytics handlers - Session summaries and exports.

mod export_session;

pub use export_session::{ExportSessionError, ExportSessionHandler, ExportSessionQuery};
