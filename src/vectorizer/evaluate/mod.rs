pub mod scoring;

use crate::{
    error::Result,
    vectorizer::{compute::matrix::SimilarityMatrix, evaluate::scoring::Hits},
};

/// Capability to rank the nearest documents of a corpus member.
///
/// The dense [`SimilarityMatrix`] answers from precomputed rows; an
/// approximate index can implement the same trait for larger corpora.
pub trait SimilarityIndex {
    /// Number of indexed documents
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Top-`k` neighbors of the document at `index`, excluding itself
    fn neighbors(&self, index: usize, k: usize) -> Result<Hits>;
}

impl SimilarityIndex for SimilarityMatrix {
    fn len(&self) -> usize {
        SimilarityMatrix::len(self)
    }

    fn neighbors(&self, index: usize, k: usize) -> Result<Hits> {
        scoring::neighbors(self, index, k)
    }
}
