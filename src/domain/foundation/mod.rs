//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the facilitation domain.

mod errors;
mod ids;
mod technique_id;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use technique_id::TechniqueId;
pub use timestamp::Timestamp;
