pub mod source;

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

/// One input record as supplied by a corpus source.
///
/// Field aliases accept the arXiv-style `Title` / `Summary` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    #[serde(alias = "title", alias = "Title", alias = "id")]
    pub identifier: String,
    #[serde(alias = "summary", alias = "Summary", alias = "abstract")]
    pub text: String,
}

impl DocumentRecord {
    pub fn new(identifier: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            text: text.into(),
        }
    }
}

/// A document held by the corpus. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    position: usize,
    identifier: Box<str>,
    text: Box<str>,
}

impl Document {
    /// 0-based position in the corpus
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Text used for similarity
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Ordered, immutable collection of documents with identifier lookup.
///
/// Identifiers are unique: a duplicate is rejected at load time instead of
/// being resolved to the first match.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: IndexMap<Box<str>, Document>,
}

impl Corpus {
    /// Load records in order, rejecting duplicate identifiers.
    /// An empty record list gives an empty corpus; building a model from it fails.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = DocumentRecord>,
    {
        let records = records.into_iter();
        let mut documents: IndexMap<Box<str>, Document> =
            IndexMap::with_capacity(records.size_hint().0);
        for (position, record) in records.enumerate() {
            let identifier: Box<str> = record.identifier.into_boxed_str();
            match documents.entry(identifier) {
                Entry::Occupied(entry) => {
                    return Err(SimilarityError::DuplicateIdentifier {
                        identifier: entry.key().to_string(),
                        first: entry.index(),
                        second: position,
                    });
                }
                Entry::Vacant(entry) => {
                    let identifier = entry.key().clone();
                    entry.insert(Document {
                        position,
                        identifier,
                        text: record.text.into_boxed_str(),
                    });
                }
            }
        }
        tracing::debug!(documents = documents.len(), "corpus loaded");
        Ok(Self { documents })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Document at `index`
    pub fn get(&self, index: usize) -> Result<&Document> {
        self.documents
            .get_index(index)
            .map(|(_, doc)| doc)
            .ok_or(SimilarityError::UnknownDocument {
                index,
                len: self.len(),
            })
    }

    /// Position of the document with `identifier`
    pub fn index_of(&self, identifier: &str) -> Result<usize> {
        self.documents
            .get_index_of(identifier)
            .ok_or_else(|| SimilarityError::UnknownIdentifier {
                identifier: identifier.to_string(),
            })
    }

    /// Identifier of the document at `index`
    pub fn identifier(&self, index: usize) -> Result<&str> {
        self.get(index).map(Document::identifier)
    }

    /// Documents in corpus order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Document> + '_ {
        self.documents.values()
    }

    /// Texts in corpus order
    pub fn texts(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.documents.values().map(Document::text)
    }
}
