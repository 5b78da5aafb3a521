//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::memory::InMemorySessionStore;
use crate::domain::technique::{StimulusDraw, StimulusSource, STIMULUS_WORDS};
use crate::ports::SessionStore;

/// Deterministic stimulus source: the first pool word not yet used.
pub struct FirstUnusedWord;

impl StimulusSource for FirstUnusedWord {
    fn draw(&self, used: &[String]) -> StimulusDraw {
        let word = STIMULUS_WORDS
            .iter()
            .find(|w| !used.iter().any(|u| u == *w))
            .unwrap_or(&STIMULUS_WORDS[0]);
        StimulusDraw {
            word: word.to_string(),
            alternatives: vec!["compass".to_string()],
        }
    }
}

pub fn store() -> Arc<dyn SessionStore> {
    Arc::new(InMemorySessionStore::new())
}

pub fn stimulus() -> Arc<dyn StimulusSource> {
    Arc::new(FirstUnusedWord)
}
