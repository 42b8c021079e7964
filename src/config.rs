//! Run configuration.
//!
//! Loaded from a TOML file; every key is optional:
//!
//! ```toml
//! granularity = "bigram"
//! amount = 25
//! include_infinite = false
//! infrequent_threshold = 3
//! hyperpartisan_path = "data/txt/hyperpartisan.txt"
//! non_hyperpartisan_path = "data/txt/non-hyperpartisan.txt"
//! output_dir = "data/log_odd_ratios"
//! ```

use crate::core::types::Granularity;
use crate::error::{LogOddsError, Result};
use crate::preprocess::DEFAULT_ARTICLE_END;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub granularity: Granularity,
    /// How many tokens `top` prints.
    pub amount: usize,
    pub include_infinite: bool,
    /// Tokens seen fewer times than this across both corpora are dropped
    /// before counting. 0 keeps everything.
    pub infrequent_threshold: usize,
    pub article_end_marker: String,
    pub hyperpartisan_path: PathBuf,
    pub non_hyperpartisan_path: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            granularity: Granularity::Unigram,
            amount: 50,
            include_infinite: true,
            infrequent_threshold: 0,
            article_end_marker: DEFAULT_ARTICLE_END.to_string(),
            hyperpartisan_path: PathBuf::from("data/txt/hyperpartisan.txt"),
            non_hyperpartisan_path: PathBuf::from("data/txt/non-hyperpartisan.txt"),
            output_dir: PathBuf::from("data/log_odd_ratios"),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(LogOddsError::Configuration(
                "amount must be a positive integer".to_string(),
            ));
        }
        if self.article_end_marker.trim().is_empty() {
            return Err(LogOddsError::Configuration(
                "article_end_marker must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
