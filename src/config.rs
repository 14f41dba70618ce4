//! Pipeline configuration, loadable from TOML.
//!
//! ```toml
//! [tokenizer]
//! lowercase = true
//! min_token_chars = 1
//!
//! [weighting]
//! smooth_idf = true
//! sublinear_tf = false
//!
//! [matrix]
//! parallel = true
//!
//! [ranking]
//! default_k = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimilarityError};

/// Number of neighbors returned when the caller does not ask for a specific count.
pub const DEFAULT_K: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    #[serde(default)]
    pub weighting: WeightingConfig,
    #[serde(default)]
    pub matrix: MatrixConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// How raw text is split into terms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Case-fold before splitting
    #[serde(default = "default_true")]
    pub lowercase: bool,
    /// Tokens with fewer characters are dropped.
    /// `2` mimics the usual `\b\w\w+\b` token pattern.
    #[serde(default = "default_min_token_chars")]
    pub min_token_chars: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            min_token_chars: default_min_token_chars(),
        }
    }
}

/// Term weighting switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightingConfig {
    /// idf = ln((1 + N) / (1 + df)) + 1 when set, ln(N / df) + 1 otherwise
    #[serde(default = "default_true")]
    pub smooth_idf: bool,
    /// tf = 1 + ln(count) when set, raw count otherwise
    #[serde(default)]
    pub sublinear_tf: bool,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatrixConfig {
    /// Build matrix rows on the rayon pool
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RankingConfig {
    #[serde(default = "default_k")]
    pub default_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self { default_k: DEFAULT_K }
    }
}

fn default_true() -> bool {
    true
}

fn default_min_token_chars() -> usize {
    1
}

fn default_k() -> usize {
    DEFAULT_K
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tokenizer.validate()?;
        self.ranking.validate()
    }
}

impl TokenizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.min_token_chars == 0 {
            return Err(SimilarityError::Config(
                "tokenizer.min_token_chars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl RankingConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_k == 0 {
            return Err(SimilarityError::Config(
                "ranking.default_k must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.tokenizer.lowercase);
        assert_eq!(config.tokenizer.min_token_chars, 1);
        assert!(config.weighting.smooth_idf);
        assert!(!config.weighting.sublinear_tf);
        assert!(config.matrix.parallel);
        assert_eq!(config.ranking.default_k, 5);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml_str(
            r#"
            [tokenizer]
            min_token_chars = 2

            [matrix]
            parallel = false
            "#,
        )
        .unwrap();
        assert_eq!(config.tokenizer.min_token_chars, 2);
        assert!(config.tokenizer.lowercase);
        assert!(!config.matrix.parallel);
        assert_eq!(config.ranking.default_k, DEFAULT_K);
    }

    #[test]
    fn rejects_zero_values() {
        let err = Config::from_toml_str("[ranking]\ndefault_k = 0\n").unwrap_err();
        assert!(matches!(err, SimilarityError::Config(_)));

        let err = Config::from_toml_str("[tokenizer]\nmin_token_chars = 0\n").unwrap_err();
        assert!(matches!(err, SimilarityError::Config(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = Config::from_toml_str("[weighting]\nbm25 = true\n").unwrap_err();
        assert!(matches!(err, SimilarityError::Toml(_)));
    }
}
