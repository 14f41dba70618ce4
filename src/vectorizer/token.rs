use indexmap::IndexMap;

use crate::config::TokenizerConfig;

/// Splits raw text into normalized terms.
///
/// Terms are maximal runs of alphanumeric characters; everything else is a
/// boundary. Empty runs never become terms.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    lowercase: bool,
    min_token_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::from_config(&TokenizerConfig::default())
    }
}

impl Tokenizer {
    pub fn from_config(config: &TokenizerConfig) -> Self {
        Self {
            lowercase: config.lowercase,
            min_token_chars: config.min_token_chars.max(1),
        }
    }

    /// Tokenize `text` into terms, in order of appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let folded;
        let text = if self.lowercase {
            folded = text.to_lowercase();
            folded.as_str()
        } else {
            text
        };
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .filter(|s| self.min_token_chars <= 1 || s.chars().count() >= self.min_token_chars)
            .map(str::to_string)
            .collect()
    }

    /// Tokenize and count in one pass
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new();
        freq.add_terms(&self.tokenize(text));
        freq
    }
}

/// TermFrequency
/// Occurrence count of each term within one document.
/// Terms keep the order in which they were first added.
///
/// # Examples
/// ```
/// use tfidf_neighbors::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_terms(&["graph", "walk", "graph"]);
/// assert_eq!(freq.term_count("graph"), 2);
/// assert_eq!(freq.term_sum(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    term_count: IndexMap<Box<str>, u32>,
    total_term_count: u64,
}

impl TermFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        match self.term_count.get_mut(term) {
            Some(count) => *count += 1,
            None => {
                self.term_count.insert(Box::from(term), 1);
            }
        }
        self.total_term_count += 1;
        self
    }

    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Occurrences of `term`, 0 when absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u32 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Total number of term occurrences
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// `(term, count)` in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.term_count.iter().map(|(t, &c)| (&**t, c))
    }

    /// Distinct terms in first-seen order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(|s| &**s).collect()
    }
}
