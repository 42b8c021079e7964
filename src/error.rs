// src/error.rs
use crate::core::types::Granularity;
use thiserror::Error;

/// Errors that can occur while building, scoring or storing log-odd ratios.
#[derive(Error, Debug)]
pub enum LogOddsError {
    /// A run was configured with inputs the arithmetic cannot accept,
    /// e.g. a corpus with zero tokens.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid token granularity '{0}' (expected 'unigram' or 'bigram')")]
    InvalidGranularity(String),

    #[error("Invalid label '{0}' (expected 'hyperpartisan' or 'non-hyperpartisan')")]
    InvalidLabel(String),

    #[error("Stored result holds {found} scores, but {expected} scores were requested")]
    GranularityMismatch {
        expected: Granularity,
        found: Granularity,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LogOddsError>;
