// src/core/types.rs
use crate::error::LogOddsError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A single scored unit: one word, or an ordered pair of adjacent words
/// taken from the same document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Token {
    Unigram(String),
    Bigram(String, String),
}

impl Token {
    pub fn granularity(&self) -> Granularity {
        match self {
            Token::Unigram(_) => Granularity::Unigram,
            Token::Bigram(_, _) => Granularity::Bigram,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Unigram(word) => write!(f, "{}", word),
            Token::Bigram(first, second) => write!(f, "({}, {})", first, second),
        }
    }
}

impl From<&str> for Token {
    fn from(word: &str) -> Self {
        Token::Unigram(word.to_string())
    }
}

impl From<(&str, &str)> for Token {
    fn from((first, second): (&str, &str)) -> Self {
        Token::Bigram(first.to_string(), second.to_string())
    }
}

/// Which shape of [`Token`] a pipeline counts. Chosen once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Unigram,
    Bigram,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Unigram => "unigram",
            Granularity::Bigram => "bigram",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = LogOddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unigram" | "unigrams" => Ok(Granularity::Unigram),
            "bigram" | "bigrams" => Ok(Granularity::Bigram),
            _ => Err(LogOddsError::InvalidGranularity(s.to_string())),
        }
    }
}

/// The two document classes. `Hyperpartisan` is the positive side of every
/// score: a high score means "typical of hyperpartisan articles".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Label {
    Hyperpartisan,
    NonHyperpartisan,
}

impl Label {
    pub fn display_name(&self) -> &'static str {
        match self {
            Label::Hyperpartisan => "Hyperpartisan",
            Label::NonHyperpartisan => "Non-Hyperpartisan",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Label {
    type Err = LogOddsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "hyperpartisan" => Ok(Label::Hyperpartisan),
            "non-hyperpartisan" => Ok(Label::NonHyperpartisan),
            _ => Err(LogOddsError::InvalidLabel(s.to_string())),
        }
    }
}

/// Every distinct token seen in either corpus of one run.
pub type Vocabulary = HashSet<Token>;

/// One cleaned document: its tokens in reading order.
pub type Document = Vec<String>;
