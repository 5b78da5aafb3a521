//! Session domain module.
//!
//! A session is one run of a technique against a problem statement. It owns
//! its step pointer, accumulated technique data, generated step content and
//! captured ideas.
//!
//! # Lifecycle
//!
//! ```text
//! start ──▶ step 0 ──submit──▶ step 1 ──submit──▶ ... ──submit──▶ complete
//!              │
//!              └──switch──▶ new hybrid session (source untouched)
//! ```
//!
//! Completed sessions are frozen; every further mutation fails with
//! `SessionAlreadyCompleted`.

mod aggregate;
mod completion;
mod idea;
mod status;
mod step_payload;

pub use aggregate::Session;
pub use completion::{
    CompletionResult, CompletionStatus, CompletionSummary, TechniqueHighlights, NEXT_OPTIONS,
};
pub use idea::IdeaRecord;
pub use status::{SessionOverview, SessionStatus, StepOutcome, TechniqueInfo};
pub use step_payload::{
    StepPayload, GENERATED_KEYS, IDEAS_KEY, PARTICIPANT_KEY, PRESERVED_KEY, RANDOM_WORDS_KEY,
    REVERSED_PROBLEM_KEY,
};

/// Share of `done` over `total` as an unrounded percentage.
pub(crate) fn percentage(done: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * done as f64 / total as f64
}
