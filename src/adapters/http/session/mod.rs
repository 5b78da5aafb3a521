//! HTTP adapter for session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ExportQuery, SessionListResponse, StartSessionRequest, StartSessionResponse,
    SwitchTechniqueRequest, SwitchTechniqueResponse,
};
pub use handlers::FacilitationAppState;
pub use routes::session_router;
