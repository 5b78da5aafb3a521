//! Analytics module - Read-only views derived from sessions.
//!
//! Every export format renders the same [`SessionSummary`], so the
//! representations differ in shape only.

mod summary;

pub use summary::{IdeaEntry, SessionSummary};
