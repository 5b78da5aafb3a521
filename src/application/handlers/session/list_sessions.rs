//! ListSessionsHandler - Query handler for listing every known session.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::session::SessionOverview;
use crate::ports::SessionStore;

/// Handler listing active and completed sessions, ordered by id.
pub struct ListSessionsHandler {
    store: Arc<dyn SessionStore>,
}

impl ListSessionsHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    pub fn handle(&self) -> Result<Vec<SessionOverview>, DomainError> {
        Ok(self.store.list()?.iter().map(|s| s.overview()).collect())
    }
}
