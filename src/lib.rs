//! This crate is a document neighbor engine built on a TF-IDF vectorizer.

pub mod config;
pub mod error;
pub mod logging;
pub mod utils;
pub mod vectorizer;

/// Similarity Model
/// The top-level struct of this crate. One `build` runs the whole pipeline
/// over a corpus and keeps its outputs for querying.
///
/// Internally, it holds:
/// - The corpus vocabulary and document frequencies
/// - An IDF vector
/// - One L2-normalized sparse TF-IDF vector per document
/// - The dense all-pairs cosine similarity matrix
///
/// `SimilarityModel<N, E>` has the following generic parameters:
/// - `N`: Vector parameter type (f32, f64)
/// - `E`: TF-IDF calculation engine type (e.g., DefaultTFIDFEngine)
///
/// The model is read-only. A changed corpus needs a new build.
pub use vectorizer::{build, neighbors, SimilarityModel};

/// Corpus structures
/// A `Corpus` is the ordered document collection; a document's position is
/// its index in every vector and matrix row.
/// Identifiers must be unique.
///
/// `DocumentRecord` is the raw `{ identifier, text }` input shape, which also
/// accepts `Title`/`Summary` field names.
pub use vectorizer::corpus::{Corpus, Document, DocumentRecord};

/// Corpus Sources
/// `CorpusSource` turns some input into document records.
/// `JsonFileSource` reads a JSON array or JSON lines file.
pub use vectorizer::corpus::source::{CorpusSource, JsonFileSource};

/// Tokenizer and Term Frequency
/// The tokenizer case-folds text and splits it on non-alphanumeric characters.
/// `TermFrequency` counts each term's occurrences within a document.
pub use vectorizer::token::{TermFrequency, Tokenizer};

/// Vocabulary
/// Every distinct term of the corpus mapped to a stable index, in first-seen
/// order, with the number of documents containing each term.
pub use vectorizer::vocabulary::Vocabulary;

/// TF IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug different weighting strategies
/// into `SimilarityModel<N, E>`.
/// The default implementation, `DefaultTFIDFEngine`, uses raw-count TF,
/// smoothed IDF and L2 normalization.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Similarity Matrix
/// Symmetric dense matrix of pairwise cosine similarities, every entry in [0, 1].
pub use vectorizer::compute::matrix::SimilarityMatrix;

/// Similarity Index Trait
/// Ranks the nearest documents of a corpus member. Implemented by the dense
/// `SimilarityMatrix`.
pub use vectorizer::evaluate::SimilarityIndex;

/// Search Hits and Hit Entry structures
/// - `Hits`: ranked neighbor list, best first
/// - `HitEntry`: one result, containing the document index and score
pub use vectorizer::evaluate::scoring::{HitEntry, Hits};

pub use config::Config;
pub use error::{Result, SimilarityError};
