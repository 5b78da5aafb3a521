//! HTTP adapter for the technique catalog.

mod handlers;
mod routes;

pub use handlers::TechniqueListResponse;
pub use routes::technique_router;
