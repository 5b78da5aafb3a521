//! Technique query handlers.

mod get_technique;
mod list_techniques;

pub use get_technique::{
    GetTechniqueError, GetTechniqueHandler, GetTechniqueQuery, StepInstruction,
    TechniqueInstructions,
};
pub use list_techniques::{ListTechniquesHandler, TechniqueSummary};
