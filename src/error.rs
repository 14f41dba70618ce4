//! Error type shared by every stage of the pipeline.

use thiserror::Error;

/// Errors raised while loading a corpus, building the model or ranking neighbors.
///
/// None of these are fatal for the process: the caller decides how to surface them.
#[derive(Error, Debug)]
pub enum SimilarityError {
    #[error("corpus is empty: at least one document is required")]
    EmptyCorpus,

    #[error("unknown document index {index} (corpus has {len} documents)")]
    UnknownDocument { index: usize, len: usize },

    #[error("unknown document identifier: {identifier:?}")]
    UnknownIdentifier { identifier: String },

    #[error("invalid neighbor count {k}: must be a positive integer")]
    InvalidK { k: usize },

    #[error("duplicate document identifier {identifier:?} at positions {first} and {second}")]
    DuplicateIdentifier {
        identifier: String,
        first: usize,
        second: usize,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SimilarityError>;
