//! Facilitation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound on alternative stimulus words offered per draw.
pub const MAX_STIMULUS_ALTERNATIVES: usize = 5;

/// Session facilitation settings
#[derive(Debug, Clone, Deserialize)]
pub struct FacilitationConfig {
    /// Participant recorded when a session starts without any
    #[serde(default = "default_participant")]
    pub default_participant: String,

    /// Extra stimulus words offered alongside each drawn word
    #[serde(default = "default_stimulus_alternatives")]
    pub stimulus_alternatives: usize,

    /// Comma-separated replacement for the built-in stimulus pool
    pub stimulus_words: Option<String>,

    /// Fixed RNG seed for reproducible stimulus draws
    pub stimulus_seed: Option<u64>,
}

impl FacilitationConfig {
    /// The custom stimulus pool, if one is configured.
    pub fn custom_stimulus_words(&self) -> Option<Vec<String>> {
        self.stimulus_words.as_deref().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|word| !word.is_empty())
                .map(str::to_string)
                .collect()
        })
    }

    /// Validate facilitation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_participant.trim().is_empty() {
            return Err(ValidationError::MissingRequired("facilitation.default_participant"));
        }
        if self
            .custom_stimulus_words()
            .is_some_and(|words| words.is_empty())
        {
            return Err(ValidationError::MissingRequired("facilitation.stimulus_words"));
        }
        if self.stimulus_alternatives > MAX_STIMULUS_ALTERNATIVES {
            return Err(ValidationError::TooManyAlternatives {
                max: MAX_STIMULUS_ALTERNATIVES,
            });
        }
        Ok(())
    }
}

impl Default for FacilitationConfig {
    fn default() -> Self {
        Self {
            default_participant: default_participant(),
            stimulus_alternatives: default_stimulus_alternatives(),
            stimulus_words: None,
            stimulus_seed: None,
        }
    }
}

fn default_participant() -> String {
    "default_user".to_string()
}

fn default_stimulus_alternatives() -> usize {
    2
}
