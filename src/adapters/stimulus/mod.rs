//! Stimulus word sources.

mod random_word_source;

pub use random_word_source::RandomWordSource;
