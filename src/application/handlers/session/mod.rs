//! Session command and query handlers.

mod get_session_status;
mod list_sessions;
mod start_session;
mod submit_step;
mod switch_technique;

pub use get_session_status::{
    GetSessionStatusError, GetSessionStatusHandler, GetSessionStatusQuery,
};
pub use list_sessions::ListSessionsHandler;
pub use start_session::{
    StartSessionCommand, StartSessionError, StartSessionHandler, StartSessionResult,
};
pub use submit_step::{SubmitStepCommand, SubmitStepError, SubmitStepHandler};
pub use switch_technique::{
    SwitchTechniqueCommand, SwitchTechniqueError, SwitchTechniqueHandler, SwitchTechniqueResult,
};
