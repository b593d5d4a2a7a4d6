//! Shared value types for word ladder distance computation.
//!
//! This crate holds the pieces every other crate in the workspace agrees on:
//! the validated [`word::Word`] value, the closed [`vocabulary::Vocabulary`]
//! that defines which words are graph nodes, the [`distance::Distance`]
//! result type, and the common [`LadderError`].
//!
//! # Architecture
//!
//! - [`alphabet`] -- letters and suffixes used by transformation rules
//! - [`word`] -- validated, immutable word values
//! - [`vocabulary`] -- sorted, hashed word set with stable indices
//! - [`distance`] -- shortest-path length with an explicit unreachable marker

pub mod alphabet;
pub mod distance;
pub mod vocabulary;
pub mod word;

/// Error type shared by every word ladder crate.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    /// A query referenced a word that is not in the vocabulary.
    #[error("word not found: {0:?}")]
    WordNotFound(String),

    /// A string could not be turned into a [`word::Word`].
    #[error("invalid word {0:?}: {1}")]
    InvalidWord(String, &'static str),

    /// A word list produced no usable words.
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A word list file could not be read.
    #[error("failed to read word list {path}: {source}")]
    WordlistRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LadderError>;
