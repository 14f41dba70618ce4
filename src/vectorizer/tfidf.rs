use num::Float;

use crate::{
    config::WeightingConfig,
    utils::math::vector::ZeroSpVec,
    vectorizer::{token::TermFrequency, vocabulary::Vocabulary},
};

/// TF-IDF calculation engine.
///
/// Turns vocabulary statistics into IDF weights and term counts into
/// L2-normalized document vectors. The vector parameter type `N` decides the
/// storage precision; weights are always computed in f64.
pub trait TFIDFEngine<N>
where
    N: Float + Into<f64>,
{
    /// IDF weight per vocabulary index
    ///
    /// # Arguments
    /// * `vocab` - vocabulary with document frequencies and N
    /// * `config` - weighting switches
    ///
    /// # Returns
    /// * `Vec<f64>` - one weight per vocabulary index
    fn idf_vec(vocab: &Vocabulary, config: &WeightingConfig) -> Vec<f64>;

    /// Weighted and L2-normalized vector of one document.
    /// Terms missing from the vocabulary are ignored; a document with no
    /// known term yields the zero vector.
    ///
    /// # Arguments
    /// * `freq` - term counts of the document
    /// * `vocab` - vocabulary giving the vector dimension and indices
    /// * `idf` - output of `idf_vec` for the same vocabulary
    /// * `config` - weighting switches
    ///
    /// # Returns
    /// * `ZeroSpVec<N>` - unit-length vector, or the zero vector
    fn tfidf_vec(
        freq: &TermFrequency,
        vocab: &Vocabulary,
        idf: &[f64],
        config: &WeightingConfig,
    ) -> ZeroSpVec<N>;
}

/// Default engine, matching scikit-learn's `TfidfVectorizer` defaults:
/// - tf = raw count (`1 + ln(count)` with `sublinear_tf`)
/// - idf = ln((1 + N) / (1 + df)) + 1 (`ln(N / df) + 1` without `smooth_idf`)
/// - l2 norm
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Term frequency weight
    ///
    /// # Arguments
    /// * `count` - occurrences of the term in the document
    /// * `sublinear` - use `1 + ln(count)` instead of the raw count
    ///
    /// # Returns
    /// * `f64` - 0.0 for an absent term
    #[inline]
    pub fn tf_calc(count: u32, sublinear: bool) -> f64 {
        if count == 0 {
            return 0.0;
        }
        if sublinear {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }

    /// Inverse document frequency
    ///
    /// # Arguments
    /// * `doc_num` - documents in the corpus (N)
    /// * `doc_freq` - documents containing the term (df)
    /// * `smooth` - add one to N and df as if one extra document held every term
    ///
    /// # Returns
    /// * `f64` - idf weight, at least 1.0
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64, smooth: bool) -> f64 {
        let n = doc_num as f64;
        let df = doc_freq as f64;
        if smooth {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float + Into<f64>,
{
    fn idf_vec(vocab: &Vocabulary, config: &WeightingConfig) -> Vec<f64> {
        let doc_num = vocab.doc_num();
        vocab
            .doc_freqs()
            .iter()
            .map(|&df| Self::idf_calc(doc_num, df, config.smooth_idf))
            .collect()
    }

    fn tfidf_vec(
        freq: &TermFrequency,
        vocab: &Vocabulary,
        idf: &[f64],
        config: &WeightingConfig,
    ) -> ZeroSpVec<N> {
        let mut vec = ZeroSpVec::from_entries(
            vocab.len(),
            freq.iter().filter_map(|(term, count)| {
                let idx = vocab.index_of(term)?;
                let w = Self::tf_calc(count, config.sublinear_tf) * idf.get(idx).copied()?;
                Some((u32::try_from(idx).ok()?, num::cast::<f64, N>(w)?))
            }),
        );
        vec.l2_normalize();
        vec.shrink_to_fit();
        vec
    }
}
