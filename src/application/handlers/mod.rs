//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Handlers
//! are synchronous and cheap to construct; adapters build one per request.

pub mod analytics;
pub mod session;
pub mod technique;

#[cfg(test)]
pub(crate) mod test_support;

pub use analytics::{ExportSessionError, ExportSessionHandler, ExportSessionQuery};
pub use session::{
    GetSessionStatusError, GetSessionStatusHandler, GetSessionStatusQuery, ListSessionsHandler,
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
    SubmitStepCommand, SubmitStepError, SubmitStepHandler, SwitchTechniqueCommand,
    SwitchTechniqueError, SwitchTechniqueHandler, SwitchTechniqueResult,
};
pub use technique::{
    GetTechniqueError, GetTechniqueHandler, GetTechniqueQuery, ListTechniquesHandler,
    StepInstruction, TechniqueInstructions, TechniqueSummary,
};
