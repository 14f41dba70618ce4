pub mod compute;
pub mod corpus;
pub mod evaluate;
pub mod tfidf;
pub mod token;
pub mod vocabulary;

use std::marker::PhantomData;
use std::time::Instant;

use num::Float;

use crate::{
    config::{Config, WeightingConfig},
    error::{Result, SimilarityError},
    utils::math::vector::ZeroSpVec,
    vectorizer::{
        compute::matrix::SimilarityMatrix,
        corpus::Corpus,
        evaluate::scoring::{self, HitEntry, Hits},
        tfidf::{DefaultTFIDFEngine, TFIDFEngine},
        token::{TermFrequency, Tokenizer},
        vocabulary::Vocabulary,
    },
};

/// Output of one pipeline run: vocabulary, document vectors and the
/// all-pairs similarity matrix, all read-only.
///
/// Built in one pass from a finished corpus. A changed corpus needs a new
/// `build`; nothing here is updated in place.
///
/// `SimilarityModel<N, E>`:
/// - `N`: vector parameter type (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine
#[derive(Debug, Clone)]
pub struct SimilarityModel<N = f64, E = DefaultTFIDFEngine>
where
    N: Float + Into<f64>,
    E: TFIDFEngine<N>,
{
    tokenizer: Tokenizer,
    weighting: WeightingConfig,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    vectors: Vec<ZeroSpVec<N>>,
    matrix: SimilarityMatrix,
    _marker: PhantomData<E>,
}

/// Build with the default configuration
pub fn build(corpus: &Corpus) -> Result<SimilarityModel> {
    SimilarityModel::build(corpus)
}

/// Top-`k` neighbors of `index` from a built matrix
pub fn neighbors(matrix: &SimilarityMatrix, index: usize, k: usize) -> Result<Hits> {
    scoring::neighbors(matrix, index, k)
}

impl<N, E> SimilarityModel<N, E>
where
    N: Float + Into<f64> + Send + Sync,
    E: TFIDFEngine<N>,
{
    pub fn build(corpus: &Corpus) -> Result<Self> {
        Self::build_with(corpus, &Config::default())
    }

    /// Run vocabulary -> vectors -> matrix on `corpus`.
    ///
    /// Only the sections used while building are checked; `ranking` is
    /// left to the caller that ranks.
    ///
    /// # Errors
    /// `EmptyCorpus` when the corpus has no document, `Config` when the
    /// tokenizer section does not validate.
    pub fn build_with(corpus: &Corpus, config: &Config) -> Result<Self> {
        config.tokenizer.validate()?;
        if corpus.is_empty() {
            return Err(SimilarityError::EmptyCorpus);
        }
        let _span = tracing::info_span!("build", documents = corpus.len()).entered();
        let start = Instant::now();

        let tokenizer = Tokenizer::from_config(&config.tokenizer);
        let freqs: Vec<TermFrequency> =
            corpus.texts().map(|text| tokenizer.term_frequency(text)).collect();

        let vocabulary = Vocabulary::build(&freqs)?;
        tracing::debug!(terms = vocabulary.len(), "vocabulary built");

        let idf = E::idf_vec(&vocabulary, &config.weighting);
        let vectors: Vec<ZeroSpVec<N>> = freqs
            .iter()
            .map(|freq| E::tfidf_vec(freq, &vocabulary, &idf, &config.weighting))
            .collect();
        let empty = vectors.iter().filter(|v| v.is_zero()).count();
        if empty > 0 {
            tracing::warn!(documents = empty, "documents without any term encode to zero vectors");
        }

        let matrix = SimilarityMatrix::build(&vectors, config.matrix.parallel);

        tracing::info!(
            documents = corpus.len(),
            terms = vocabulary.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "similarity model built"
        );
        Ok(Self {
            tokenizer,
            weighting: config.weighting.clone(),
            vocabulary,
            idf,
            vectors,
            matrix,
            _marker: PhantomData,
        })
    }
}

impl<N, E> SimilarityModel<N, E>
where
    N: Float + Into<f64>,
    E: TFIDFEngine<N>,
{
    #[inline]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// IDF weight per vocabulary index
    #[inline]
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Document vectors in corpus order
    #[inline]
    pub fn vectors(&self) -> &[ZeroSpVec<N>] {
        &self.vectors
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    /// Number of documents
    #[inline]
    pub fn doc_num(&self) -> usize {
        self.vectors.len()
    }

    /// Similarity of documents `i` and `j`
    pub fn similarity(&self, i: usize, j: usize) -> Result<f64> {
        let len = self.doc_num();
        let unknown = if i >= len { i } else { j };
        self.matrix
            .get(i, j)
            .ok_or(SimilarityError::UnknownDocument { index: unknown, len })
    }

    /// Top-`k` neighbors of the document at `index`
    pub fn neighbors(&self, index: usize, k: usize) -> Result<Hits> {
        scoring::neighbors(&self.matrix, index, k)
    }

    /// Top-`k` neighbors of the document named `identifier`
    pub fn neighbors_of(&self, corpus: &Corpus, identifier: &str, k: usize) -> Result<Hits> {
        let index = corpus.index_of(identifier)?;
        self.neighbors(index, k)
    }

    /// Encode free text against this model's vocabulary and IDF
    pub fn encode(&self, text: &str) -> ZeroSpVec<N> {
        let freq = self.tokenizer.term_frequency(text);
        E::tfidf_vec(&freq, &self.vocabulary, &self.idf, &self.weighting)
    }

    /// Top-`k` corpus documents most similar to free text.
    /// Unlike [`Self::neighbors`], no document is excluded.
    pub fn query_text(&self, text: &str, k: usize) -> Result<Hits> {
        if k == 0 {
            return Err(SimilarityError::InvalidK { k });
        }
        let query = self.encode(text);
        let mut hits = Hits::new(
            self.vectors
                .iter()
                .enumerate()
                .map(|(index, doc)| HitEntry {
                    index,
                    score: query.dot(doc).clamp(0.0, 1.0),
                })
                .collect(),
        );
        hits.sort_by_score_desc();
        hits.list.truncate(k);
        Ok(hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::corpus::DocumentRecord;

    fn corpus() -> Corpus {
        Corpus::from_records(vec![
            DocumentRecord::new("A", "cats are animals"),
            DocumentRecord::new("B", "dogs are animals"),
            DocumentRecord::new("C", "quantum physics"),
        ])
        .unwrap()
    }

    #[test]
    fn shared_terms_rank_higher() {
        let corpus = corpus();
        let model = build(&corpus).unwrap();
        let a = corpus.index_of("A").unwrap();
        let b = corpus.index_of("B").unwrap();
        let c = corpus.index_of("C").unwrap();
        assert!(model.similarity(a, b).unwrap() > model.similarity(a, c).unwrap());
        assert_eq!(model.similarity(a, c).unwrap(), 0.0);

        let hits = model.neighbors(a, 1).unwrap();
        assert_eq!(hits.list, vec![HitEntry { index: b, score: model.similarity(a, b).unwrap() }]);
        assert_eq!(hits.with_identifiers(&corpus).unwrap()[0].0, "B");
    }

    #[test]
    fn neighbors_of_resolves_identifier() {
        let corpus = corpus();
        let model = build(&corpus).unwrap();
        let hits = model.neighbors_of(&corpus, "B", 5).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.list[0].index, 0);
        assert!(matches!(
            model.neighbors_of(&corpus, "missing", 5),
            Err(SimilarityError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn empty_corpus_is_rejected() {
        let corpus = Corpus::from_records(Vec::new()).unwrap();
        assert!(matches!(build(&corpus), Err(SimilarityError::EmptyCorpus)));
    }

    #[test]
    fn invalid_tokenizer_config_is_rejected() {
        let mut config = Config::default();
        config.tokenizer.min_token_chars = 0;
        let built: Result<SimilarityModel> = SimilarityModel::build_with(&corpus(), &config);
        assert!(matches!(built, Err(SimilarityError::Config(_))));
    }

    #[test]
    fn ranking_section_does_not_affect_build() {
        let mut config = Config::default();
        config.ranking.default_k = 0;
        let built: Result<SimilarityModel> = SimilarityModel::build_with(&corpus(), &config);
        assert_eq!(built.unwrap().doc_num(), 3);
    }

    #[test]
    fn f32_vectors_give_close_scores() {
        let corpus = corpus();
        let wide = build(&corpus).unwrap();
        let narrow: SimilarityModel<f32> = SimilarityModel::build(&corpus).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let d = wide.similarity(i, j).unwrap() - narrow.similarity(i, j).unwrap();
                assert!(d.abs() < 1e-6);
            }
        }
    }

    #[test]
    fn query_text_scores_every_document() {
        let corpus = corpus();
        let model = build(&corpus).unwrap();
        let hits = model.query_text("Quantum animals?", 3).unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits.list[0].score > 0.0);
        assert!(matches!(model.query_text("x", 0), Err(SimilarityError::InvalidK { k: 0 })));
        assert!(model.encode("!!!").is_zero());
    }

    #[test]
    fn similarity_reports_out_of_range_index() {
        let model = build(&corpus()).unwrap();
        assert!(matches!(
            model.similarity(0, 7),
            Err(SimilarityError::UnknownDocument { index: 7, len: 3 })
        ));
    }
}
