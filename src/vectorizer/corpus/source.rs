use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{Corpus, DocumentRecord};

/// Supplies a finished, ordered list of records.
///
/// Sources do all their I/O (and any retry policy) before returning; the
/// corpus is built from the complete list and never appended to afterwards.
pub trait CorpusSource {
    fn records(self) -> Result<Vec<DocumentRecord>>;

    /// Load the records and build a corpus from them
    fn load(self) -> Result<Corpus>
    where
        Self: Sized,
    {
        Corpus::from_records(self.records()?)
    }
}

impl CorpusSource for Vec<DocumentRecord> {
    fn records(self) -> Result<Vec<DocumentRecord>> {
        Ok(self)
    }
}

/// Records from a local JSON file.
///
/// Accepts either a JSON array of records or JSON lines (one record per
/// non-blank line).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusSource for JsonFileSource {
    fn records(self) -> Result<Vec<DocumentRecord>> {
        let content = fs::read_to_string(&self.path)?;
        let records = parse_records(&content)?;
        tracing::info!(
            path = %self.path.display(),
            records = records.len(),
            "read corpus file"
        );
        Ok(records)
    }
}

/// Parse a JSON array or JSON lines document
pub fn parse_records(content: &str) -> Result<Vec<DocumentRecord>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str::<DocumentRecord>(line).map_err(Into::into))
        .collect()
}
