use serde::Serialize;

use crate::{
    error::{Result, SimilarityError},
    vectorizer::{compute::matrix::SimilarityMatrix, corpus::Corpus},
};

/// One ranked neighbor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HitEntry {
    /// Document position in the corpus
    pub index: usize,
    /// Cosine similarity to the query document
    pub score: f64,
}

/// Ranked neighbor list, best first
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort by descending score; equal scores by ascending index.
    /// NaN scores are dropped.
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        self.list.retain(|e| !e.score.is_nan());
        self.list
            .sort_by(|a, b| b.score.total_cmp(&a.score).then_with(|| a.index.cmp(&b.index)));
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitEntry> + '_ {
        self.list.iter()
    }

    /// Pairs each hit with its document identifier
    pub fn with_identifiers<'c>(&self, corpus: &'c Corpus) -> Result<Vec<(&'c str, f64)>> {
        self.list
            .iter()
            .map(|e| corpus.identifier(e.index).map(|id| (id, e.score)))
            .collect()
    }
}

/// Top-`k` most similar documents to `index`, excluding itself.
///
/// Sorted by descending score, ties by ascending index. A corpus with fewer
/// than `k + 1` documents returns every other document.
///
/// # Errors
/// - `InvalidK` when `k == 0`
/// - `UnknownDocument` when `index` is out of range
pub fn neighbors(matrix: &SimilarityMatrix, index: usize, k: usize) -> Result<Hits> {
    if k == 0 {
        return Err(SimilarityError::InvalidK { k });
    }
    let row = matrix.row(index).ok_or(SimilarityError::UnknownDocument {
        index,
        len: matrix.len(),
    })?;

    let mut hits = Hits::new(
        row.iter()
            .enumerate()
            .filter(|&(j, _)| j != index)
            .map(|(j, &score)| HitEntry { index: j, score })
            .collect(),
    );
    hits.sort_by_score_desc();
    hits.list.truncate(k);
    tracing::trace!(index, k, returned = hits.len(), "ranked neighbors");
    Ok(hits)
}
