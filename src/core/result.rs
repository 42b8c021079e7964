// src/core/result.rs
use crate::core::types::{Granularity, Token};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The durable output of a run: one signed score per vocabulary token.
/// Scores may be `+inf` or `-inf`, never NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogOddsResult {
    granularity: Granularity,
    scores: HashMap<Token, f64>,
}

impl LogOddsResult {
    pub fn new(granularity: Granularity, scores: HashMap<Token, f64>) -> Self {
        Self { granularity, scores }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn get(&self, token: &Token) -> Option<f64> {
        self.scores.get(token).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, f64)> {
        self.scores.iter().map(|(token, &score)| (token, score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
