//! Session store port.
//!
//! Defines the contract for holding active and completed sessions.
//!
//! # Design
//!
//! - **Explicitly owned**: stores are values passed to handlers, never globals
//! - **Snapshot reads**: `find` and `list` return complete clones
//! - **Draft mutation**: `update` applies a mutation to a copy and commits it
//!   only when the mutation succeeds

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::Session;

/// Mutation applied to a session draft by [`SessionStore::update`].
pub type SessionMutation<'a> = dyn FnMut(&mut Session) -> Result<(), DomainError> + 'a;

/// Store port for session records.
///
/// Implementations must ensure:
/// - Ids are unique across active and completed sessions
/// - Mutations on one session id are serialized
/// - A session that becomes complete moves to history atomically
pub trait SessionStore: Send + Sync {
    /// Inserts a new active session.
    ///
    /// # Errors
    ///
    /// - `DuplicateSession` if the id is already active or completed
    fn insert(&self, session: Session) -> Result<(), DomainError>;

    /// Finds a session in either the active set or history.
    fn find(&self, id: &SessionId) -> Result<Option<Session>, DomainError>;

    /// Applies `mutation` to an active session and returns the committed state.
    ///
    /// On error the stored session is unchanged.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the id is unknown
    /// - `SessionAlreadyCompleted` if the session is in history
    /// - any error returned by `mutation`
    fn update(
        &self,
        id: &SessionId,
        mutation: &mut SessionMutation<'_>,
    ) -> Result<Session, DomainError>;

    /// Lists every session, active and completed, ordered by id.
    fn list(&self) -> Result<Vec<Session>, DomainError>;
}
