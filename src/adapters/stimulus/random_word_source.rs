//! Random stimulus word source backed by `rand`.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::domain::foundation::ValidationError;
use crate::domain::technique::{StimulusDraw, STIMULUS_WORDS};
use crate::ports::StimulusSource;

/// Draws stimulus words uniformly at random from a fixed pool.
///
/// Words already used in the session are avoided while unused ones remain.
/// Once every word has been used the whole pool is eligible again.
pub struct RandomWordSource {
    words: Vec<String>,
    alternatives: usize,
    rng: Mutex<StdRng>,
}

impl RandomWordSource {
    /// Creates a source over `words`, offering `alternatives` extra words per draw.
    ///
    /// Duplicate and blank words are dropped.
    pub fn new(words: Vec<String>, alternatives: usize) -> Result<Self, ValidationError> {
        let mut pool: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            let word = word.trim().to_lowercase();
            if !word.is_empty() && !pool.contains(&word) {
                pool.push(word);
            }
        }
        if pool.is_empty() {
            return Err(ValidationError::empty_field("stimulus_words"));
        }
        Ok(Self {
            words: pool,
            alternatives,
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Creates a source over the built-in word pool.
    pub fn standard(alternatives: usize) -> Self {
        Self {
            words: STIMULUS_WORDS.iter().map(|w| w.to_string()).collect(),
            alternatives,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Replaces the generator with a seeded one for reproducible draws.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn pool_size(&self) -> usize {
        self.words.len()
    }
}

impl StimulusSource for RandomWordSource {
    fn draw(&self, used: &[String]) -> StimulusDraw {
        let unused: Vec<&String> = self.words.iter().filter(|w| !used.contains(w)).collect();
        let candidates: Vec<&String> = if unused.is_empty() {
            self.words.iter().collect()
        } else {
            unused
        };

        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let word = candidates
            .choose(&mut *rng)
            .map(|w| w.to_string())
            .unwrap_or_default();

        let others: Vec<&String> = candidates.into_iter().filter(|w| **w != word).collect();
        let alternatives = others
            .choose_multiple(&mut *rng, self.alternatives)
            .map(|w| w.to_string())
            .collect();

        StimulusDraw { word, alternatives }
    }
}
