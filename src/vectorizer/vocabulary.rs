use indexmap::IndexSet;

use crate::error::{Result, SimilarityError};
use crate::vectorizer::token::TermFrequency;

/// Term dictionary of one encoding pass.
///
/// Holds:
/// - the term -> index mapping, indices assigned in first-seen order
/// - the number of documents containing each term
/// - the number of documents scanned
#[derive(Debug, Clone, PartialEq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
    doc_freq: Vec<u64>,
    doc_num: u64,
}

impl Vocabulary {
    /// Scan per-document term frequencies in corpus order.
    ///
    /// # Errors
    /// `EmptyCorpus` when `docs` is empty.
    pub fn build(docs: &[TermFrequency]) -> Result<Self> {
        if docs.is_empty() {
            return Err(SimilarityError::EmptyCorpus);
        }
        let mut terms: IndexSet<Box<str>> = IndexSet::new();
        let mut doc_freq: Vec<u64> = Vec::new();
        for freq in docs {
            // each distinct term of a document counts once toward its df
            for (term, _) in freq.iter() {
                match terms.get_index_of(term) {
                    Some(idx) => doc_freq[idx] += 1,
                    None => {
                        terms.insert(Box::from(term));
                        doc_freq.push(1);
                    }
                }
            }
        }
        Ok(Self {
            terms,
            doc_freq,
            doc_num: docs.len() as u64,
        })
    }

    /// Number of distinct terms (vector dimension)
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents scanned (N)
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| &**t)
    }

    /// Documents containing the term at `index`, 0 when out of range
    #[inline]
    pub fn doc_freq(&self, index: usize) -> u64 {
        self.doc_freq.get(index).copied().unwrap_or(0)
    }

    /// Document frequencies in index order
    #[inline]
    pub fn doc_freqs(&self) -> &[u64] {
        &self.doc_freq
    }

    /// Terms in index order
    pub fn terms(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.terms.iter().map(|t| &**t)
    }
}
