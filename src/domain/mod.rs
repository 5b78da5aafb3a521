//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `technique` - Static catalog of ideation techniques and their steps
//! - `session` - Session aggregate, step execution and completion
//! - `analytics` - Read-only summaries shared by every export format

pub mod analytics;
pub mod foundation;
pub mod session;
pub mod technique;
