//! Stimulus words for random word association.

/// Fixed pool of stimulus words, grouped loosely by theme.
pub const STIMULUS_WORDS: &[&str] = &[
    // Objects
    "telescope", "bicycle", "lighthouse", "butterfly", "compass", "bridge", "fountain",
    "garden", "mountain", "river", "canvas", "mirror", "clock", "book", "key",
    "ladder", "door", "window", "tree", "flower", "stone", "feather", "shell",
    // Actions
    "explore", "discover", "transform", "connect", "build", "flow", "dance", "sing",
    "jump", "climb", "swim", "fly", "create", "imagine", "dream", "wonder",
    "search", "find", "gather", "share", "teach", "learn", "grow", "bloom",
    // Concepts
    "freedom", "harmony", "balance", "energy", "mystery", "adventure", "journey",
    "discovery", "innovation", "creativity", "inspiration", "imagination",
    "curiosity", "passion", "courage", "wisdom", "strength", "peace", "joy",
    // Nature
    "ocean", "forest", "desert", "volcano", "glacier", "meadow", "valley", "peak",
    "cloud", "storm", "rainbow", "sunrise", "moonlight", "star", "comet", "planet",
    // Technology
    "robot", "satellite", "network", "algorithm", "quantum", "digital", "virtual",
    "artificial", "augmented", "blockchain", "neural", "hologram", "laser", "plasma",
];

/// Result of drawing a stimulus word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StimulusDraw {
    pub word: String,
    /// Other candidates offered alongside `word`; not marked as used.
    pub alternatives: Vec<String>,
}

/// Source of stimulus words.
///
/// Implementations must prefer words not in `used` while any remain.
pub trait StimulusSource: Send + Sync {
    fn draw(&self, used: &[String]) -> StimulusDraw;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pool_has_at_least_forty_distinct_words() {
        let distinct: HashSet<_> = STIMULUS_WORDS.iter().collect();
        assert_eq!(distinct.len(), STIMULUS_WORDS.len());
        assert!(distinct.len() >= 40);
    }

    #[test]
    fn pool_words_are_lowercase_single_tokens() {
        for word in STIMULUS_WORDS {
            assert!(!word.contains(' '));
            assert_eq!(*word, word.to_lowercase());
        }
    }
}
