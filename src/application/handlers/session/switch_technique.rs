//! SwitchTechniqueHandler - Command handler for hybrid technique switches.
//!
//! A switch spawns a new session on another technique that inherits the
//! source's problem statement and participants. The source stays active and
//! unchanged, so the facilitator can return to it later.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId, TechniqueId, Timestamp};
use crate::domain::session::{Session, SessionStatus};
use crate::ports::{SessionStore, StimulusSource};

/// Prefix for ids of sessions spawned by a switch.
const HYBRID_PREFIX: &str = "hybrid";

/// Command to switch a session to another technique.
#[derive(Debug, Clone)]
pub struct SwitchTechniqueCommand {
    pub session_id: String,
    pub new_technique: String,
    /// Copy the source's ideas into the new session.
    pub preserve_data: bool,
}

/// Result of a successful switch.
#[derive(Debug, Clone)]
pub struct SwitchTechniqueResult {
    pub new_session_id: SessionId,
    pub initial_status: SessionStatus,
}

/// Error type for technique switches.
#[derive(Debug, Clone, Error)]
pub enum SwitchTechniqueError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already completed: {0}")]
    AlreadyCompleted(String),

    #[error("Unknown technique: {0}")]
    UnknownTechnique(String),

    #[error("Domain error: {0}")]
    Domain(DomainError),
}

/// Handler for technique switches.
pub struct SwitchTechniqueHandler {
    store: Arc<dyn SessionStore>,
    stimulus: Arc<dyn StimulusSource>,
}

impl SwitchTechniqueHandler {
    pub fn new(store: Arc<dyn SessionStore>, stimulus: Arc<dyn StimulusSource>) -> Self {
        Self { store, stimulus }
    }

    pub fn handle(
        &self,
        cmd: SwitchTechniqueCommand,
    ) -> Result<SwitchTechniqueResult, SwitchTechniqueError> {
        let technique: TechniqueId = cmd
            .new_technique
            .parse()
            .map_err(|_| SwitchTechniqueError::UnknownTechnique(cmd.new_technique.clone()))?;
        let Ok(source_id) = SessionId::new(cmd.session_id.as_str()) else {
            return Err(SwitchTechniqueError::NotFound(cmd.session_id));
        };

        // The hybrid is derived inside the store's mutation so the source is
        // read under its session lock, serialized with concurrent submissions.
        let new_session_id = SessionId::generate(HYBRID_PREFIX);
        let stimulus = self.stimulus.as_ref();
        let mut hybrid: Option<Session> = None;
        self.store
            .update(&source_id, &mut |source: &mut Session| {
                hybrid = Some(source.hybrid_from(
                    new_session_id.clone(),
                    technique,
                    cmd.preserve_data,
                    stimulus,
                )?);
                Ok(())
            })
            .map_err(|e| match e.code {
                ErrorCode::SessionNotFound => SwitchTechniqueError::NotFound(cmd.session_id.clone()),
                ErrorCode::SessionAlreadyCompleted => {
                    SwitchTechniqueError::AlreadyCompleted(cmd.session_id.clone())
                }
                _ => SwitchTechniqueError::Domain(e),
            })?;

        let hybrid = hybrid.ok_or_else(|| {
            SwitchTechniqueError::Domain(DomainError::new(
                ErrorCode::InternalError,
                "Hybrid session was not created",
            ))
        })?;
        let initial_status = hybrid.status(Timestamp::now());
        let preserved_ideas = hybrid.inherited_idea_count();

        self.store.insert(hybrid).map_err(SwitchTechniqueError::Domain)?;

        info!(
            session_id = %new_session_id,
            parent_session_id = %source_id,
            technique = technique.as_str(),
            preserved_ideas,
            "Switched to hybrid session"
        );

        Ok(SwitchTechniqueResult {
            new_session_id,
            initial_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::session::{
        StartSessionCommand, StartSessionHandler, SubmitStepCommand, SubmitStepHandler,
    };
    use crate::application::handlers::test_support::{stimulus, store};
    use crate::domain::session::PRESERVED_KEY;
    use serde_json::{json, Value};

    fn start(store: &Arc<dyn SessionStore>, technique: &str) -> String {
        StartSessionHandler::new(store.clone(), stimulus(), "default_user")
            .handle(StartSessionCommand {
                technique: technique.to_string(),
                problem_statement: "Improve onboarding".to_string(),
                participants: vec!["alice".into(), "bob".into()],
                session_id: None,
            })
            .unwrap()
            .session_id
            .to_string()
    }

    fn submit(store: &Arc<dyn SessionStore>, id: &str, payload: Value) {
        SubmitStepHandler::new(store.clone(), stimulus())
            .handle(SubmitStepCommand {
                session_id: id.to_string(),
                payload,
            })
            .unwrap();
    }

    /// Random word session with two captured ideas, left at step 4.
    fn source_with_ideas(store: &Arc<dyn SessionStore>) -> String {
        let id = start(store, "random_word_association");
        submit(store, &id, json!({}));
        submit(store, &id, json!({}));
        submit(store, &id, json!({"associations": {"beam": "focus"}}));
        submit(store, &id, json!({"ideas": ["Buddy system", "Day-one checklist"]}));
        id
    }

    fn switch(
        store: &Arc<dyn SessionStore>,
        id: &str,
        technique: &str,
        preserve_data: bool,
    ) -> Result<SwitchTechniqueResult, SwitchTechniqueError> {
        SwitchTechniqueHandler::new(store.clone(), stimulus()).handle(SwitchTechniqueCommand {
            session_id: id.to_string(),
            new_technique: technique.to_string(),
            preserve_data,
        })
    }

    #[test]
    fn preserving_switch_copies_ideas_and_records_provenance() {
        let store = store();
        let source_id = source_with_ideas(&store);

        let result = switch(&store, &source_id, "lotus_blossom", true).unwrap();

        assert!(result.new_session_id.as_str().starts_with("hybrid_"));
        let status = &result.initial_status;
        assert_eq!(status.current_step, 0);
        assert_eq!(status.ideas_generated, 2);
        assert_eq!(status.parent_session_id.as_ref().unwrap().as_str(), source_id);
        assert_eq!(status.participants, vec!["alice", "bob"]);

        let hybrid = store.find(&result.new_session_id).unwrap().unwrap();
        let preserved = &hybrid.technique_data()[PRESERVED_KEY];
        assert_eq!(preserved["source_session_id"], source_id.as_str());
        assert_eq!(preserved["technique"], "random_word_association");
        assert_eq!(preserved["ideas_count"], 2);
    }

    #[test]
    fn non_preserving_switch_starts_empty() {
        let store = store();
        let source_id = source_with_ideas(&store);

        let result = switch(&store, &source_id, "reverse_brainstorming", false).unwrap();

        assert_eq!(result.initial_status.ideas_generated, 0);
        let hybrid = store.find(&result.new_session_id).unwrap().unwrap();
        assert!(hybrid.technique_data().get(PRESERVED_KEY).is_none());
    }

    #[test]
    fn source_is_left_active_and_unchanged() {
        let store = store();
        let source_id = source_with_ideas(&store);
        let id = SessionId::new(source_id.as_str()).unwrap();
        let before = store.find(&id).unwrap().unwrap();

        switch(&store, &source_id, "lotus_blossom", true).unwrap();

        let after = store.find(&id).unwrap().unwrap();
        assert_eq!(before, after);
        assert!(after.is_active());
    }

    #[test]
    fn unknown_technique_is_rejected() {
        let store = store();
        let source_id = start(&store, "lotus_blossom");
        let err = switch(&store, &source_id, "six_hats", true).unwrap_err();
        assert!(matches!(err, SwitchTechniqueError::UnknownTechnique(t) if t == "six_hats"));
    }

    #[test]
    fn unknown_session_is_not_found() {
        let err = switch(&store(), "missing", "lotus_blossom", true).unwrap_err();
        assert!(matches!(err, SwitchTechniqueError::NotFound(_)));
    }

    #[test]
    fn completed_source_cannot_switch() {
        let store = store();
        let source_id = start(&store, "random_word_association");
        for payload in [
            json!({}),
            json!({}),
            json!({"associations": {"beam": "focus"}}),
            json!({"ideas": ["Idea"]}),
            json!({}),
            json!({}),
        ] {
            submit(&store, &source_id, payload);
        }

        let err = switch(&store, &source_id, "lotus_blossom", true).unwrap_err();
        assert!(matches!(err, SwitchTechniqueError::AlreadyCompleted(_)));
    }
}
