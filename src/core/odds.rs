// src/core/odds.rs
use crate::core::corpus::Corpus;
use crate::core::frequency::FrequencyTable;
use crate::core::progress;
use crate::core::types::Token;
use crate::core::warning::{DegenerateCounts, DegenerateKind, DegenerateValueWarning};
use crate::error::{LogOddsError, Result};
use std::collections::HashMap;

/// Share of the corpus taken up by a token: `count / total`.
/// A corpus without tokens has no defined probabilities.
pub fn probability(count: u64, total_token_count: usize) -> Result<f64> {
    if total_token_count == 0 {
        return Err(LogOddsError::Configuration(
            "cannot compute probabilities over a corpus with zero tokens".to_string(),
        ));
    }
    Ok(count as f64 / total_token_count as f64)
}

/// `p / (1 - p)`, with `p == 1` mapped to `+inf` instead of dividing by zero.
pub fn odds(probability: f64) -> f64 {
    if probability >= 1.0 {
        f64::INFINITY
    } else {
        probability / (1.0 - probability)
    }
}

/// Odds of every token present in one corpus. Missing tokens read as 0.0.
#[derive(Debug, Clone)]
pub struct OddsTable {
    values: HashMap<Token, f64>,
}

impl OddsTable {
    /// Derives the odds of every counted token, consuming the corpus and its
    /// counts: neither is needed once the odds exist.
    pub fn derive(
        corpus: Corpus,
        frequencies: FrequencyTable,
        show_progress: bool,
    ) -> Result<(Self, DegenerateCounts)> {
        let label = corpus.label();
        let total = corpus.total_token_count();
        if total == 0 {
            return Err(LogOddsError::Configuration(format!(
                "the {} corpus contains no tokens",
                label
            )));
        }

        let bar = progress::bar(
            show_progress,
            frequencies.len(),
            format!("Calculating odds for {}", label),
        );
        let mut values = HashMap::with_capacity(frequencies.len());
        let mut degenerate = DegenerateCounts::default();
        for (token, count) in frequencies.iter() {
            let value = odds(probability(count, total)?);
            if value.is_infinite() {
                degenerate.record(DegenerateValueWarning::new(
                    token,
                    DegenerateKind::InfiniteOdds(label),
                ));
            }
            values.insert(token.clone(), value);
            bar.inc(1);
        }
        bar.finish_and_clear();

        tracing::info!("Calculated odds for {} tokens of {}", values.len(), label);
        Ok((Self { values }, degenerate))
    }

    pub fn get(&self, token: &Token) -> f64 {
        self.values.get(token).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frequency::FrequencyAggregator;
    use crate::core::types::{Granularity, Label};

    #[test]
    fn odds_of_edge_probabilities() {
        assert_eq!(odds(0.0), 0.0);
        assert_eq!(odds(0.5), 1.0);
        assert!((odds(2.0 / 3.0) - 2.0).abs() < 1e-12);
        assert_eq!(odds(1.0), f64::INFINITY);
    }

    #[test]
    fn probability_requires_tokens() {
        assert!(matches!(probability(1, 0), Err(LogOddsError::Configuration(_))));
        assert_eq!(probability(1, 4).unwrap(), 0.25);
    }

    #[test]
    fn derive_reads_missing_tokens_as_zero() {
        let corpus = Corpus::new(
            Label::Hyperpartisan,
            vec![vec!["a".to_string(), "b".to_string()], vec!["a".to_string()]],
        );
        let (frequencies, _) = FrequencyAggregator::new(Granularity::Unigram).aggregate(&corpus);
        let (table, degenerate) = OddsTable::derive(corpus, frequencies, false).unwrap();

        assert!((table.get(&Token::from("a")) - 2.0).abs() < 1e-12);
        assert!((table.get(&Token::from("b")) - 0.5).abs() < 1e-12);
        assert_eq!(table.get(&Token::from("c")), 0.0);
        assert_eq!(degenerate, DegenerateCounts::default());
    }

    #[test]
    fn sole_token_has_infinite_odds() {
        let corpus = Corpus::new(
            Label::NonHyperpartisan,
            vec![vec!["only".to_string(), "only".to_string()]],
        );
        let (frequencies, _) = FrequencyAggregator::new(Granularity::Unigram).aggregate(&corpus);
        let (table, degenerate) = OddsTable::derive(corpus, frequencies, false).unwrap();

        assert_eq!(table.get(&Token::from("only")), f64::INFINITY);
        assert_eq!(degenerate.infinite_odds_non_hyperpartisan, 1);
        assert_eq!(degenerate.total(), 1);
    }

    #[test]
    fn derive_rejects_empty_corpus() {
        let corpus = Corpus::new(Label::Hyperpartisan, vec![vec![]]);
        let frequencies = FrequencyTable::default();
        assert!(matches!(
            OddsTable::derive(corpus, frequencies, false),
            Err(LogOddsError::Configuration(_))
        ));
    }
}
