//! In-memory session store.
//!
//! Active sessions each sit behind their own mutex so mutations on one id
//! are serialized while other sessions proceed. Completed sessions are
//! immutable and shared by `Arc`.
//!
//! # Lock order
//!
//! Session mutex first, registry lock second. The registry lock is never
//! held while waiting on a session mutex.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Session;
use crate::ports::{SessionMutation, SessionStore};

/// In-memory session store.
///
/// Holds nothing beyond process lifetime. Several stores may coexist, for
/// example one per test.
#[derive(Default)]
pub struct InMemorySessionStore {
    registry: RwLock<Registry>,
}

#[derive(Default)]
struct Registry {
    active: HashMap<SessionId, Arc<Mutex<Session>>>,
    history: HashMap<SessionId, Arc<Session>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Registry>, DomainError> {
        self.registry.read().map_err(poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Registry>, DomainError> {
        self.registry.write().map_err(poisoned)
    }
}

impl SessionStore for InMemorySessionStore {
    fn insert(&self, session: Session) -> Result<(), DomainError> {
        let mut registry = self.write()?;
        let id = session.id().clone();
        if registry.active.contains_key(&id) || registry.history.contains_key(&id) {
            return Err(DomainError::new(
                ErrorCode::DuplicateSession,
                format!("Session '{}' already exists", id),
            )
            .with_detail("session_id", id.as_str()));
        }
        registry.active.insert(id, Arc::new(Mutex::new(session)));
        Ok(())
    }

    fn find(&self, id: &SessionId) -> Result<Option<Session>, DomainError> {
        let cell = {
            let registry = self.read()?;
            if let Some(completed) = registry.history.get(id) {
                return Ok(Some(Session::clone(completed)));
            }
            registry.active.get(id).cloned()
        };

        // A session relocated while we waited still holds its final state.
        match cell {
            Some(cell) => Ok(Some(cell.lock().map_err(poisoned)?.clone())),
            None => Ok(None),
        }
    }

    fn update(
        &self,
        id: &SessionId,
        mutation: &mut SessionMutation<'_>,
    ) -> Result<Session, DomainError> {
        let cell = {
            let registry = self.read()?;
            if registry.history.contains_key(id) {
                return Err(already_completed(id));
            }
            registry.active.get(id).cloned().ok_or_else(|| not_found(id))?
        };

        let mut current = cell.lock().map_err(poisoned)?;
        if current.is_complete() {
            return Err(already_completed(id));
        }

        let mut draft = current.clone();
        mutation(&mut draft)?;
        *current = draft.clone();

        if draft.is_complete() {
            let mut registry = self.write()?;
            registry.active.remove(id);
            registry.history.insert(id.clone(), Arc::new(draft.clone()));
        }

        Ok(draft)
    }

    fn list(&self) -> Result<Vec<Session>, DomainError> {
        let (cells, mut sessions) = {
            let registry = self.read()?;
            let cells: Vec<_> = registry.active.values().cloned().collect();
            let completed: Vec<_> = registry
                .history
                .values()
                .map(|s| Session::clone(s))
                .collect();
            (cells, completed)
        };

        for cell in cells {
            let session = cell.lock().map_err(poisoned)?.clone();
            // Skip entries that were relocated after the registry snapshot.
            if !sessions.iter().any(|s| s.id() == session.id()) {
                sessions.push(session);
            }
        }

        sessions.sort_by(|a, b| a.id().cmp(b.id()));
        Ok(sessions)
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::new(ErrorCode::InternalError, "Session store lock poisoned")
}

fn not_found(id: &SessionId) -> DomainError {
    DomainError::new(
        ErrorCode::SessionNotFound,
        format!("Session '{}' not found", id),
    )
    .with_detail("session_id", id.as_str())
}

fn already_completed(id: &SessionId) -> DomainError {
    DomainError::new(
        ErrorCode::SessionAlreadyCompleted,
        format!("Session '{}' is already completed", id),
    )
    .with_detail("session_id", id.as_str())
}
