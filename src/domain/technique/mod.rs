//! Technique module - The static catalog of ideation techniques.
//!
//! A technique is an ordered list of steps. Each step declares the payload
//! shape it accepts and, optionally, a rule for content the system generates
//! when a session enters it.

mod catalog;
mod definition;
mod stimulus;

pub use catalog::TechniqueCatalog;
pub use definition::{
    DataEntry, GeneratedContent, GenerationRule, PayloadShape, StepHints, StepSpec,
    TechniqueDefinition,
};
pub use stimulus::{StimulusDraw, StimulusSource, STIMULUS_WORDS};
