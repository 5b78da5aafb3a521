//! Integration tests for the session lifecycle.
//!
//! These tests drive the application handlers against the in-memory store:
//! 1. Start, status, submit and completion across every technique
//! 2. Validation failures leave sessions untouched
//! 3. Hybrid switches with and without preserved ideas
//! 4. Export stability for completed sessions

use std::sync::Arc;

use proptest::prelude::*;
use serde_json::{json, Value};

use ideation_facilitator::adapters::{standard_renderers, InMemorySessionStore};
use ideation_facilitator::application::handlers::analytics::{
    ExportSessionHandler, ExportSessionQuery,
};
use ideation_facilitator::application::handlers::session::{
    GetSessionStatusError, GetSessionStatusHandler, GetSessionStatusQuery, ListSessionsHandler,
    StartSessionCommand, StartSessionError, StartSessionHandler, SubmitStepCommand,
    SubmitStepError, SubmitStepHandler, SwitchTechniqueCommand, SwitchTechniqueHandler,
};
use ideation_facilitator::application::handlers::technique::{
    GetTechniqueHandler, GetTechniqueQuery,
};
use ideation_facilitator::domain::session::{SessionStatus, StepOutcome};
use ideation_facilitator::domain::technique::STIMULUS_WORDS;
use ideation_facilitator::ports::{SessionStore, StimulusDraw, StimulusSource};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Cycles through the pool in order, skipping used words.
struct SequentialWords;

impl StimulusSource for SequentialWords {
    fn draw(&self, used: &[String]) -> StimulusDraw {
        let word = STIMULUS_WORDS
            .iter()
            .find(|w| !used.iter().any(|u| u == *w))
            .unwrap_or(&STIMULUS_WORDS[0]);
        StimulusDraw {
            word: word.to_string(),
            alternatives: Vec::new(),
        }
    }
}

struct Facilitator {
    store: Arc<dyn SessionStore>,
    stimulus: Arc<dyn StimulusSource>,
}

impl Facilitator {
    fn new() -> Self {
        Self {
            store: Arc::new(InMemorySessionStore::new()),
            stimulus: Arc::new(SequentialWords),
        }
    }

    fn start(&self, technique: &str, problem: &str) -> String {
        self.try_start(technique, problem, None).unwrap()
    }

    fn try_start(
        &self,
        technique: &str,
        problem: &str,
        session_id: Option<&str>,
    ) -> Result<String, StartSessionError> {
        StartSessionHandler::new(self.store.clone(), self.stimulus.clone(), "default_user")
            .handle(StartSessionCommand {
                technique: technique.to_string(),
                problem_statement: problem.to_string(),
                participants: Vec::new(),
                session_id: session_id.map(str::to_string),
            })
            .map(|r| r.session_id.to_string())
    }

    fn status(&self, id: &str) -> Result<SessionStatus, GetSessionStatusError> {
        GetSessionStatusHandler::new(self.store.clone()).handle(GetSessionStatusQuery {
            session_id: id.to_string(),
        })
    }

    fn submit(&self, id: &str, payload: Value) -> Result<StepOutcome, SubmitStepError> {
        SubmitStepHandler::new(self.store.clone(), self.stimulus.clone()).handle(
            SubmitStepCommand {
                session_id: id.to_string(),
                payload,
            },
        )
    }

    fn export(&self, id: &str, format: &str) -> String {
        ExportSessionHandler::new(self.store.clone(), standard_renderers())
            .handle(ExportSessionQuery {
                session_id: id.to_string(),
                format: format.to_string(),
            })
            .unwrap()
            .content
    }

    /// A payload that satisfies the given step of a technique.
    fn valid_payload(&self, technique: &str, step: usize) -> Value {
        let instructions = GetTechniqueHandler::new()
            .handle(GetTechniqueQuery {
                technique: technique.to_string(),
            })
            .unwrap();
        match instructions.steps[step].required_field {
            None => json!({}),
            Some("ideas") => json!({"ideas": [format!("idea from step {}", step)]}),
            Some(field @ ("associations" | "theme_grids")) => json!({ field: {"key": "value"} }),
            Some(field) => json!({ field: ["entry"] }),
        }
    }
}

const TECHNIQUES: &[&str] = &[
    "random_word_association",
    "reverse_brainstorming",
    "lotus_blossom",
];

fn expected_percentage(done: usize, total: usize) -> f64 {
    100.0 * done as f64 / total as f64
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn fresh_session_starts_at_step_zero() {
    let f = Facilitator::new();
    for technique in TECHNIQUES {
        let id = f.start(technique, "How to improve team productivity?");
        let status = f.status(&id).unwrap();

        assert_eq!(status.current_step, 0);
        assert_eq!(status.progress_percentage, 0.0);
        assert_eq!(status.total_steps, 6);
        assert!(!status.is_complete);
    }
}

#[test]
fn n_submissions_complete_and_one_more_fails() {
    let f = Facilitator::new();
    for technique in TECHNIQUES {
        let id = f.start(technique, "Reduce support tickets");
        let total = f.status(&id).unwrap().total_steps;

        for step in 0..total {
            let outcome = f.submit(&id, f.valid_payload(technique, step)).unwrap();
            assert_eq!(outcome.is_completed(), step + 1 == total);
        }

        let err = f.submit(&id, json!({})).unwrap_err();
        assert!(matches!(err, SubmitStepError::AlreadyCompleted(_)));
        assert!(f.status(&id).unwrap().is_complete);
    }
}

#[test]
fn random_word_scenario() {
    let f = Facilitator::new();
    let id = f.start("random_word_association", "How to improve team productivity?");
    assert_eq!(f.status(&id).unwrap().current_step, 0);

    let status = match f.submit(&id, json!({})).unwrap() {
        StepOutcome::Continued(status) => status,
        StepOutcome::Completed(_) => panic!("completed too early"),
    };
    let word = status.next_action["word"].as_str().unwrap();
    assert!(STIMULUS_WORDS.contains(&word));

    f.submit(&id, json!({})).unwrap();
    f.submit(&id, json!({"associations": {"bright": "visibility"}}))
        .unwrap();
    f.submit(&id, json!({"ideas": ["Idea A", "Idea B"]})).unwrap();
    assert_eq!(f.status(&id).unwrap().ideas_generated, 2);

    f.submit(&id, json!({})).unwrap();
    match f.submit(&id, json!({})).unwrap() {
        StepOutcome::Completed(result) => {
            assert_eq!(result.summary.total_ideas_generated, 2);
            assert_eq!(result.summary.completion_rate, 100.0);
        }
        StepOutcome::Continued(_) => panic!("expected completion"),
    }
}

#[test]
fn invalid_submission_leaves_step_and_resubmission_advances_once() {
    let f = Facilitator::new();
    let id = f.start("reverse_brainstorming", "Too many meetings");
    for step in 0..4 {
        f.submit(&id, f.valid_payload("reverse_brainstorming", step))
            .unwrap();
    }
    let before = f.status(&id).unwrap();
    assert_eq!(before.current_step, 4);

    let err = f.submit(&id, json!({})).unwrap_err();
    assert!(matches!(err, SubmitStepError::InvalidStepData { .. }));
    assert_eq!(f.status(&id).unwrap().current_step, 4);

    f.submit(&id, json!({"ideas": ["No-meeting Wednesdays"]}))
        .unwrap();
    let after = f.status(&id).unwrap();
    assert_eq!(after.current_step, 5);
    assert_eq!(after.ideas_generated, 1);
}

#[test]
fn unknown_session_status_fails() {
    let f = Facilitator::new();
    let err = f.status("nonexistent").unwrap_err();
    assert!(matches!(err, GetSessionStatusError::NotFound(_)));
}

#[test]
fn duplicate_explicit_id_is_rejected_even_after_completion() {
    let f = Facilitator::new();
    let id = f
        .try_start("lotus_blossom", "Budget planning", Some("fixed-id"))
        .unwrap();
    for step in 0..6 {
        f.submit(&id, f.valid_payload("lotus_blossom", step)).unwrap();
    }

    let err = f
        .try_start("lotus_blossom", "Budget planning", Some("fixed-id"))
        .unwrap_err();
    assert!(matches!(err, StartSessionError::DuplicateSession(_)));
}

#[test]
fn blank_problem_statement_is_rejected() {
    let f = Facilitator::new();
    let err = f.try_start("lotus_blossom", "   ", None).unwrap_err();
    assert!(matches!(err, StartSessionError::Validation(_)));
}

// =============================================================================
// Reads and Exports
// =============================================================================

#[test]
fn consecutive_status_reads_match_except_duration() {
    let f = Facilitator::new();
    let id = f.start("random_word_association", "Onboarding");
    f.submit(&id, json!({})).unwrap();

    let mut first = f.status(&id).unwrap();
    let mut second = f.status(&id).unwrap();
    first.session_duration_minutes = 0.0;
    second.session_duration_minutes = 0.0;
    assert_eq!(first, second);
}

#[test]
fn consecutive_active_exports_match_except_duration() {
    let f = Facilitator::new();
    let id = f.start("random_word_association", "Onboarding");
    f.submit(&id, json!({})).unwrap();
    f.submit(&id, json!({})).unwrap();

    let mut first: Value = serde_json::from_str(&f.export(&id, "structured")).unwrap();
    let mut second: Value = serde_json::from_str(&f.export(&id, "structured")).unwrap();
    first["duration_minutes"] = Value::Null;
    second["duration_minutes"] = Value::Null;
    assert_eq!(first, second);

    let without_duration = |report: String| -> Vec<String> {
        report
            .lines()
            .filter(|line| !line.starts_with("**Duration:**"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(
        without_duration(f.export(&id, "narrative")),
        without_duration(f.export(&id, "narrative"))
    );
}

#[test]
fn generated_words_survive_a_colliding_submission() {
    let f = Facilitator::new();
    let id = f.start("random_word_association", "Onboarding");
    f.submit(&id, json!({})).unwrap();

    let err = f.submit(&id, json!({"random_words": "clobbered"})).unwrap_err();
    match err {
        SubmitStepError::InvalidStepData { field, .. } => {
            assert_eq!(field.as_deref(), Some("random_words"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(f.status(&id).unwrap().current_step, 1);

    let export: Value = serde_json::from_str(&f.export(&id, "structured")).unwrap();
    let words = export["technique_data"]["random_words"].as_array().unwrap();
    assert_eq!(words.len(), 1);
    assert!(STIMULUS_WORDS.contains(&words[0].as_str().unwrap()));
}

#[test]
fn completed_structured_export_is_byte_identical() {
    let f = Facilitator::new();
    let id = f.start("lotus_blossom", "Cross-team dependencies");
    for step in 0..6 {
        f.submit(&id, f.valid_payload("lotus_blossom", step)).unwrap();
    }

    assert_eq!(f.export(&id, "structured"), f.export(&id, "structured"));
    assert_eq!(f.export(&id, "csv"), f.export(&id, "csv"));
}

#[test]
fn listing_covers_active_and_completed_sessions() {
    let f = Facilitator::new();
    let done = f.try_start("lotus_blossom", "a", Some("a-done")).unwrap();
    for step in 0..6 {
        f.submit(&done, f.valid_payload("lotus_blossom", step))
            .unwrap();
    }
    f.try_start("reverse_brainstorming", "b", Some("b-active"))
        .unwrap();

    let listed = ListSessionsHandler::new(f.store.clone()).handle().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].is_complete);
    assert!(!listed[1].is_complete);
}

// =============================================================================
// Hybrid Switching
// =============================================================================

fn switch(f: &Facilitator, id: &str, technique: &str, preserve_data: bool) -> SessionStatus {
    SwitchTechniqueHandler::new(f.store.clone(), f.stimulus.clone())
        .handle(SwitchTechniqueCommand {
            session_id: id.to_string(),
            new_technique: technique.to_string(),
            preserve_data,
        })
        .unwrap()
        .initial_status
}

#[test]
fn switch_preserves_k_ideas_or_none() {
    let f = Facilitator::new();
    let id = f.start("reverse_brainstorming", "Late deliveries");
    for step in 0..5 {
        f.submit(&id, f.valid_payload("reverse_brainstorming", step))
            .unwrap();
    }
    let k = f.status(&id).unwrap().ideas_generated;
    assert_eq!(k, 1);

    let preserved = switch(&f, &id, "lotus_blossom", true);
    assert_eq!(preserved.ideas_generated, k);
    assert_eq!(preserved.current_step, 0);
    assert_eq!(preserved.parent_session_id.unwrap().as_str(), id);

    let fresh = switch(&f, &id, "random_word_association", false);
    assert_eq!(fresh.ideas_generated, 0);

    assert_eq!(f.status(&id).unwrap().current_step, 5);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn progress_tracks_accepted_submissions(technique in 0usize..3, submissions in 0usize..=6) {
        let f = Facilitator::new();
        let technique = TECHNIQUES[technique];
        let id = f.start(technique, "Property problem");

        for step in 0..submissions {
            f.submit(&id, f.valid_payload(technique, step)).unwrap();
        }

        let status = f.status(&id).unwrap();
        prop_assert_eq!(status.current_step, submissions);
        prop_assert_eq!(status.progress_percentage, expected_percentage(submissions, 6));
        prop_assert_eq!(status.is_complete, submissions == 6);
    }
}
