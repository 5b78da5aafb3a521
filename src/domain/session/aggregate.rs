//! Session aggregate - One run of an ideation technique.
//!
//! The aggregate enforces step sequencing: exactly one accepted submission
//! per step, validation before any mutation, generated content produced once
//! on step entry, and a completion summary frozen on the final step.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};

use crate::domain::foundation::{
    DomainError, ErrorCode, SessionId, TechniqueId, Timestamp, ValidationError,
};
use crate::domain::technique::{
    DataEntry, StepSpec, StimulusSource, TechniqueCatalog, TechniqueDefinition,
};

use super::{
    percentage, CompletionResult, CompletionSummary, IdeaRecord, SessionOverview, SessionStatus,
    StepOutcome, StepPayload, TechniqueHighlights, TechniqueInfo, NEXT_OPTIONS, PRESERVED_KEY,
    RANDOM_WORDS_KEY,
};

/// Session aggregate.
///
/// # Invariants
///
/// - `current_step <= total_steps`
/// - active iff `current_step < total_steps`
/// - `ideas` only grows
/// - `completion` and `ended_at` are set together, exactly once
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    id: SessionId,
    technique: TechniqueId,
    problem_statement: String,
    participants: Vec<String>,
    current_step: usize,
    total_steps: usize,
    technique_data: Map<String, Value>,
    /// Generated next-action content keyed by step index.
    generated: BTreeMap<usize, Map<String, Value>>,
    ideas: Vec<IdeaRecord>,
    /// Number of leading ideas copied from a parent session.
    inherited_ideas: usize,
    parent_session_id: Option<SessionId>,
    started_at: Timestamp,
    ended_at: Option<Timestamp>,
    completion: Option<CompletionSummary>,
}

impl Session {
    /// Starts a session at step 0.
    ///
    /// Blank participant names are dropped.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the problem statement is blank
    /// - `ValidationFailed` if no participant remains
    pub fn start(
        id: SessionId,
        technique: TechniqueId,
        problem_statement: impl Into<String>,
        participants: Vec<String>,
        stimulus: &dyn StimulusSource,
    ) -> Result<Self, DomainError> {
        let problem_statement = problem_statement.into().trim().to_string();
        if problem_statement.is_empty() {
            return Err(ValidationError::empty_field("problem_statement").into());
        }

        let participants: Vec<String> = participants
            .into_iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if participants.is_empty() {
            return Err(ValidationError::empty_field("participants").into());
        }

        let mut session = Self {
            id,
            technique,
            problem_statement,
            participants,
            current_step: 0,
            total_steps: TechniqueCatalog::definition(technique).step_count(),
            technique_data: Map::new(),
            generated: BTreeMap::new(),
            ideas: Vec::new(),
            inherited_ideas: 0,
            parent_session_id: None,
            started_at: Timestamp::now(),
            ended_at: None,
            completion: None,
        };
        session.enter_current_step(stimulus);
        Ok(session)
    }

    /// Creates a hybrid session on another technique from this one.
    ///
    /// The new session inherits the problem statement and participants. With
    /// `preserve_data` it also receives copies of every idea captured so far.
    /// `self` is never modified.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyCompleted` if this session is complete
    pub fn hybrid_from(
        &self,
        id: SessionId,
        technique: TechniqueId,
        preserve_data: bool,
        stimulus: &dyn StimulusSource,
    ) -> Result<Session, DomainError> {
        self.ensure_active()?;

        let mut hybrid = Session::start(
            id,
            technique,
            self.problem_statement.clone(),
            self.participants.clone(),
            stimulus,
        )?;
        hybrid.parent_session_id = Some(self.id.clone());

        if preserve_data {
            hybrid.ideas = self.ideas.clone();
            hybrid.inherited_ideas = self.ideas.len();
            hybrid.technique_data.insert(
                PRESERVED_KEY.to_string(),
                json!({
                    "source_session_id": self.id,
                    "technique": self.technique,
                    "ideas_count": self.ideas.len(),
                }),
            );
        }

        Ok(hybrid)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn technique(&self) -> TechniqueId {
        self.technique
    }

    pub fn definition(&self) -> &'static TechniqueDefinition {
        TechniqueCatalog::definition(self.technique)
    }

    pub fn problem_statement(&self) -> &str {
        &self.problem_statement
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Zero-based index of the step awaiting submission.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn technique_data(&self) -> &Map<String, Value> {
        &self.technique_data
    }

    /// Generated content cached for a step, if that step generates any.
    pub fn generated_content(&self, step: usize) -> Option<&Map<String, Value>> {
        self.generated.get(&step)
    }

    pub fn ideas(&self) -> &[IdeaRecord] {
        &self.ideas
    }

    pub fn inherited_idea_count(&self) -> usize {
        self.inherited_ideas
    }

    pub fn parent_session_id(&self) -> Option<&SessionId> {
        self.parent_session_id.as_ref()
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn ended_at(&self) -> Option<&Timestamp> {
        self.ended_at.as_ref()
    }

    /// The summary frozen at completion.
    pub fn completion(&self) -> Option<&CompletionSummary> {
        self.completion.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current_step < self.total_steps
    }

    pub fn is_complete(&self) -> bool {
        !self.is_active()
    }

    /// Elapsed minutes, measured to `now` while active and to the end
    /// timestamp once complete.
    pub fn duration_minutes(&self, now: Timestamp) -> f64 {
        self.ended_at.unwrap_or(now).minutes_since(&self.started_at)
    }

    pub fn progress_percentage(&self) -> f64 {
        percentage(self.current_step, self.total_steps)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Step execution
    // ─────────────────────────────────────────────────────────────────────────

    /// Accepts data for the current step and advances by exactly one step.
    ///
    /// Entering the final position finalizes the session. Entering any other
    /// step generates its content if the step has a generation rule.
    ///
    /// # Errors
    ///
    /// - `SessionAlreadyCompleted` if the session is complete
    /// - `InvalidStepData` if the payload does not fit the step's shape or
    ///   names a generated key; the session is left untouched
    pub fn submit_step(
        &mut self,
        payload: &StepPayload,
        stimulus: &dyn StimulusSource,
    ) -> Result<(), DomainError> {
        self.ensure_active()?;
        let step = self.current_step_spec()?;

        if let Some(key) = payload.generated_key() {
            return Err(DomainError::invalid_step_data(
                key,
                format!("'{}' is generated by the session and cannot be submitted", key),
            )
            .with_detail("step", step.action));
        }

        step.payload
            .validate(payload.fields())
            .map_err(|err| err.with_detail("step", step.action))?;

        let now = Timestamp::now();
        payload.merge_into(&mut self.technique_data);

        let participant = payload.participant();
        for text in payload.idea_texts() {
            self.ideas.push(IdeaRecord::new(
                text,
                self.current_step,
                participant.clone(),
                now,
            ));
        }

        self.current_step += 1;
        if self.current_step == self.total_steps {
            self.finalize(now);
        } else {
            self.enter_current_step(stimulus);
        }
        Ok(())
    }

    fn current_step_spec(&self) -> Result<&'static StepSpec, DomainError> {
        self.definition().step(self.current_step).ok_or_else(|| {
            DomainError::new(
                ErrorCode::InternalError,
                format!(
                    "Technique '{}' has no step {}",
                    self.technique, self.current_step
                ),
            )
        })
    }

    fn ensure_active(&self) -> Result<(), DomainError> {
        if self.is_complete() {
            return Err(DomainError::new(
                ErrorCode::SessionAlreadyCompleted,
                format!("Session '{}' is already completed", self.id),
            )
            .with_detail("session_id", self.id.as_str()));
        }
        Ok(())
    }

    /// Generates content for the current step once, on entry.
    fn enter_current_step(&mut self, stimulus: &dyn StimulusSource) {
        let Some(step) = self.definition().step(self.current_step) else {
            return;
        };
        let Some(rule) = step.generation else {
            return;
        };
        if self.generated.contains_key(&self.current_step) {
            return;
        }

        let used_words = self.used_stimulus_words();
        let content = rule.generate(&self.problem_statement, &used_words, stimulus);

        match content.data_entry {
            DataEntry::AppendTo(key, value) => match self.technique_data.get_mut(key) {
                Some(Value::Array(items)) => items.push(value),
                _ => {
                    self.technique_data
                        .insert(key.to_string(), Value::Array(vec![value]));
                }
            },
            DataEntry::Assign(key, value) => {
                self.technique_data.insert(key.to_string(), value);
            }
        }
        self.generated.insert(self.current_step, content.next_action);
    }

    fn used_stimulus_words(&self) -> Vec<String> {
        self.technique_data
            .get(RANDOM_WORDS_KEY)
            .and_then(Value::as_array)
            .map(|words| {
                words
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    fn finalize(&mut self, now: Timestamp) {
        self.ended_at = Some(now);
        self.completion = Some(CompletionSummary {
            technique_used: self.technique,
            problem_statement: self.problem_statement.clone(),
            duration_minutes: now.minutes_since(&self.started_at),
            participants: self.participants.clone(),
            total_ideas_generated: self.ideas.len(),
            steps_completed: self.current_step,
            completion_rate: percentage(self.current_step, self.total_steps),
            completed: true,
            highlights: TechniqueHighlights::extract(
                self.technique,
                &self.technique_data,
                self.ideas.len() - self.inherited_ideas,
            ),
        });
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projections
    // ─────────────────────────────────────────────────────────────────────────

    /// Builds the status projection. Never mutates the session.
    pub fn status(&self, now: Timestamp) -> SessionStatus {
        let definition = self.definition();
        let (current_instruction, next_action) = match definition.step(self.current_step) {
            Some(step) if self.is_active() => {
                let mut action = step.render_next_action(&self.problem_statement);
                if let Some(generated) = self.generated.get(&self.current_step) {
                    for (key, value) in generated {
                        action.insert(key.clone(), value.clone());
                    }
                }
                (step.instruction.to_string(), action)
            }
            _ => ("Session complete".to_string(), self.completion_action()),
        };

        SessionStatus {
            session_id: self.id.clone(),
            technique: self.technique,
            problem_statement: self.problem_statement.clone(),
            current_step: self.current_step,
            total_steps: self.total_steps,
            progress_percentage: self.progress_percentage(),
            current_instruction,
            next_action,
            participants: self.participants.clone(),
            ideas_generated: self.ideas.len(),
            session_duration_minutes: self.duration_minutes(now),
            is_complete: self.is_complete(),
            parent_session_id: self.parent_session_id.clone(),
            technique_info: TechniqueInfo {
                overview: definition.overview,
                duration: definition.duration_hint,
                when_to_use: definition.when_to_use,
            },
        }
    }

    fn completion_action(&self) -> Map<String, Value> {
        let mut action = Map::new();
        action.insert("action".into(), Value::from("complete"));
        action.insert(
            "message".into(),
            Value::from(format!("{} session complete!", self.technique.display_name())),
        );
        action.insert("next_options".into(), Value::from(NEXT_OPTIONS.to_vec()));
        action
    }

    /// The completion document, once the session is complete.
    pub fn completion_result(&self) -> Option<CompletionResult> {
        self.completion
            .as_ref()
            .map(|summary| CompletionResult::new(self.id.clone(), self.technique, summary.clone()))
    }

    /// Outcome of the submission that produced this state.
    pub fn step_outcome(&self, now: Timestamp) -> StepOutcome {
        match self.completion_result() {
            Some(result) => StepOutcome::Completed(result),
            None => StepOutcome::Continued(self.status(now)),
        }
    }

    pub fn overview(&self) -> SessionOverview {
        SessionOverview {
            session_id: self.id.clone(),
            technique: self.technique,
            current_step: self.current_step,
            total_steps: self.total_steps,
            ideas_generated: self.ideas.len(),
            is_complete: self.is_complete(),
            parent_session_id: self.parent_session_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::technique::{StimulusDraw, STIMULUS_WORDS};
    use serde_json::json;

    /// Picks the first pool word not yet used.
    struct FirstUnused;

    impl StimulusSource for FirstUnused {
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

    fn start(technique: TechniqueId) -> Session {
        Session::start(
            SessionId::new("s-1").unwrap(),
            technique,
            "How to improve team productivity?",
            vec!["alice".to_string()],
            &FirstUnused,
        )
        .unwrap()
    }

    fn submit(session: &mut Session, payload: Value) -> Result<(), DomainError> {
        session.submit_step(&StepPayload::from(payload), &FirstUnused)
    }

    fn run_random_word_to_completion(session: &mut Session) {
        submit(session, json!({})).unwrap();
        submit(session, json!({})).unwrap();
        submit(session, json!({"associations": {"beam": "focus"}})).unwrap();
        submit(session, json!({"ideas": ["Idea A", "Idea B"]})).unwrap();
        submit(session, json!({})).unwrap();
        submit(session, json!({})).unwrap();
    }

    // Construction

    #[test]
    fn start_begins_at_step_zero() {
        let session = start(TechniqueId::LotusBlossom);
        let status = session.status(Timestamp::now());
        assert_eq!(status.current_step, 0);
        assert_eq!(status.progress_percentage, 0.0);
        assert_eq!(status.total_steps, 6);
        assert!(!status.is_complete);
        assert_eq!(status.ideas_generated, 0);
    }

    #[test]
    fn start_rejects_blank_problem() {
        let err = Session::start(
            SessionId::new("s-1").unwrap(),
            TechniqueId::LotusBlossom,
            "   ",
            vec!["alice".to_string()],
            &FirstUnused,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn start_rejects_missing_participants() {
        let err = Session::start(
            SessionId::new("s-1").unwrap(),
            TechniqueId::LotusBlossom,
            "Problem",
            vec![" ".to_string()],
            &FirstUnused,
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    // Step execution

    #[test]
    fn acknowledge_step_accepts_empty_payload() {
        let mut session = start(TechniqueId::ReverseBrainstorming);
        submit(&mut session, json!({})).unwrap();
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn acknowledge_step_accepts_non_object_payload() {
        let mut session = start(TechniqueId::ReverseBrainstorming);
        submit(&mut session, json!("ok")).unwrap();
        assert_eq!(session.current_step(), 1);
    }

    #[test]
    fn entering_stimulus_step_draws_word_once() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        submit(&mut session, json!({})).unwrap();

        let first = session.status(Timestamp::now());
        let second = session.status(Timestamp::now());
        assert_eq!(first.next_action, second.next_action);

        let word = first.next_action["word"].as_str().unwrap();
        assert!(STIMULUS_WORDS.contains(&word));
        assert_eq!(session.technique_data()["random_words"], json!([word]));
    }

    #[test]
    fn reversed_problem_is_recorded_on_entry() {
        let mut session = start(TechniqueId::ReverseBrainstorming);
        submit(&mut session, json!({})).unwrap();
        assert_eq!(
            session.technique_data()["reversed_problem"],
            json!("How could we make 'How to improve team productivity?' much worse?")
        );
    }

    #[test]
    fn invalid_payload_leaves_session_unchanged() {
        let mut session = start(TechniqueId::LotusBlossom);
        submit(&mut session, json!({})).unwrap();
        let before = session.clone();

        let err = submit(&mut session, json!({"notes": "no themes"})).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStepData);
        assert_eq!(err.details.get("step"), Some(&"identify_themes".to_string()));
        assert_eq!(session, before);
    }

    #[test]
    fn submitted_generated_keys_are_rejected() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        submit(&mut session, json!({})).unwrap();
        let before = session.clone();

        let err = submit(&mut session, json!({"random_words": "clobbered"})).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStepData);
        assert_eq!(err.details.get("field"), Some(&"random_words".to_string()));
        assert_eq!(session, before);

        submit(&mut session, json!({})).unwrap();
        assert_eq!(session.used_stimulus_words().len(), 1);
    }

    #[test]
    fn corrected_resubmission_advances_once() {
        let mut session = start(TechniqueId::LotusBlossom);
        submit(&mut session, json!({})).unwrap();
        assert!(submit(&mut session, json!({})).is_err());
        submit(&mut session, json!({"themes": ["cost"]})).unwrap();
        assert_eq!(session.current_step(), 2);
    }

    #[test]
    fn ideas_are_tagged_with_step_and_participant() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        submit(&mut session, json!({})).unwrap();
        submit(&mut session, json!({})).unwrap();
        submit(&mut session, json!({"associations": {"beam": "focus"}})).unwrap();
        submit(
            &mut session,
            json!({"ideas": ["Idea A", "Idea B"], "participant": "bob"}),
        )
        .unwrap();

        assert_eq!(session.ideas().len(), 2);
        assert!(session.ideas().iter().all(|i| i.step() == 3));
        assert!(session.ideas().iter().all(|i| i.participant() == Some("bob")));
        assert!(!session.technique_data().contains_key("ideas"));
    }

    #[test]
    fn final_submission_completes_and_freezes_summary() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        run_random_word_to_completion(&mut session);

        assert!(session.is_complete());
        assert!(session.ended_at().is_some());
        let summary = session.completion().unwrap();
        assert_eq!(summary.total_ideas_generated, 2);
        assert_eq!(summary.steps_completed, 6);
        assert_eq!(summary.completion_rate, 100.0);
        assert!(summary.completed);
    }

    #[test]
    fn submission_after_completion_fails() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        run_random_word_to_completion(&mut session);

        let err = submit(&mut session, json!({})).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionAlreadyCompleted);
    }

    #[test]
    fn completed_status_reports_completion_action() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        run_random_word_to_completion(&mut session);

        let status = session.status(Timestamp::now());
        assert_eq!(status.current_instruction, "Session complete");
        assert_eq!(status.next_action["action"], json!("complete"));
        assert_eq!(status.progress_percentage, 100.0);
        assert!(status.is_complete);
    }

    #[test]
    fn step_outcome_switches_to_completion_on_final_step() {
        let mut session = start(TechniqueId::RandomWordAssociation);
        submit(&mut session, json!({})).unwrap();
        assert!(!session.step_outcome(Timestamp::now()).is_completed());

        let mut finished = start(TechniqueId::RandomWordAssociation);
        run_random_word_to_completion(&mut finished);
        assert!(finished.step_outcome(Timestamp::now()).is_completed());
    }

    // Hybrid switching

    fn session_with_ideas() -> Session {
        let mut session = start(TechniqueId::RandomWordAssociation);
        submit(&mut session, json!({})).unwrap();
        submit(&mut session, json!({})).unwrap();
        submit(&mut session, json!({"associations": {"beam": "focus"}})).unwrap();
        submit(&mut session, json!({"ideas": ["A", "B", "C"]})).unwrap();
        session
    }

    #[test]
    fn hybrid_preserving_data_copies_ideas() {
        let source = session_with_ideas();
        let hybrid = source
            .hybrid_from(
                SessionId::generate("hybrid"),
                TechniqueId::LotusBlossom,
                true,
                &FirstUnused,
            )
            .unwrap();

        assert_eq!(hybrid.ideas(), source.ideas());
        assert_eq!(hybrid.current_step(), 0);
        assert_eq!(hybrid.parent_session_id(), Some(source.id()));
        assert_eq!(hybrid.problem_statement(), source.problem_statement());
        assert_eq!(hybrid.participants(), source.participants());
        assert_eq!(
            hybrid.technique_data()[PRESERVED_KEY],
            json!({
                "source_session_id": "s-1",
                "technique": "random_word_association",
                "ideas_count": 3
            })
        );
    }

    #[test]
    fn hybrid_without_preserving_starts_empty() {
        let source = session_with_ideas();
        let hybrid = source
            .hybrid_from(
                SessionId::generate("hybrid"),
                TechniqueId::ReverseBrainstorming,
                false,
                &FirstUnused,
            )
            .unwrap();

        assert!(hybrid.ideas().is_empty());
        assert!(hybrid.technique_data().is_empty());
    }

    #[test]
    fn hybrid_leaves_source_untouched() {
        let source = session_with_ideas();
        let before = source.clone();
        let _ = source
            .hybrid_from(
                SessionId::generate("hybrid"),
                TechniqueId::LotusBlossom,
                true,
                &FirstUnused,
            )
            .unwrap();
        assert_eq!(source, before);
    }

    #[test]
    fn hybrid_from_completed_session_fails() {
        let mut source = start(TechniqueId::RandomWordAssociation);
        run_random_word_to_completion(&mut source);
        let err = source
            .hybrid_from(
                SessionId::generate("hybrid"),
                TechniqueId::LotusBlossom,
                true,
                &FirstUnused,
            )
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionAlreadyCompleted);
    }

    #[test]
    fn inherited_ideas_do_not_count_as_developed() {
        let source = session_with_ideas();
        let mut hybrid = source
            .hybrid_from(
                SessionId::generate("hybrid"),
                TechniqueId::RandomWordAssociation,
                true,
                &FirstUnused,
            )
            .unwrap();
        run_random_word_to_completion(&mut hybrid);

        let summary = hybrid.completion().unwrap();
        assert_eq!(summary.total_ideas_generated, 5);
        match &summary.highlights {
            TechniqueHighlights::RandomWordAssociation {
                developed_ideas, ..
            } => assert_eq!(*developed_ideas, 2),
            other => panic!("unexpected highlights: {:?}", other),
        }
    }
}
