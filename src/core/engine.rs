// src/core/engine.rs
use crate::core::corpus::Corpus;
use crate::core::frequency::FrequencyAggregator;
use crate::core::odds::OddsTable;
use crate::core::progress;
use crate::core::result::LogOddsResult;
use crate::core::types::{Document, Granularity, Label, Token, Vocabulary};
use crate::core::warning::{DegenerateCounts, DegenerateKind, DegenerateValueWarning};
use crate::error::{LogOddsError, Result};
use indicatif::ProgressBar;
use std::collections::HashMap;

/// `log10(x)` extended to the whole odds range:
/// `log10(0) = -inf` and `log10(+inf) = +inf`.
pub fn log10_extended(x: f64) -> f64 {
    if x <= 0.0 {
        f64::NEG_INFINITY
    } else if x.is_infinite() {
        f64::INFINITY
    } else {
        x.log10()
    }
}

/// `log10(odds_hyperpartisan) - log10(odds_non_hyperpartisan)`.
///
/// When both terms are the same infinity the difference is undefined; the
/// score is then 0.0, i.e. "no preference for either label".
pub fn log_odds_ratio(odds_hyperpartisan: f64, odds_non_hyperpartisan: f64) -> f64 {
    let first = log10_extended(odds_hyperpartisan);
    let second = log10_extended(odds_non_hyperpartisan);
    if first.is_infinite() && first == second {
        0.0
    } else {
        first - second
    }
}

/// Scores plus how many degenerate values were met producing them.
#[derive(Debug, Clone)]
pub struct LogOddsRun {
    pub result: LogOddsResult,
    pub degenerate: DegenerateCounts,
}

/// Turns the two labeled corpora into a [`LogOddsResult`].
/// One engine handles exactly one granularity.
pub struct LogOddsEngine {
    aggregator: FrequencyAggregator,
    show_progress: bool,
}

impl LogOddsEngine {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            aggregator: FrequencyAggregator::new(granularity),
            show_progress: false,
        }
    }

    /// Draws progress bars over the counting, odds and scoring passes.
    /// Off by default.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.aggregator = self.aggregator.with_progress(show);
        self.show_progress = show;
        self
    }

    pub fn granularity(&self) -> Granularity {
        self.aggregator.granularity()
    }

    /// Scores cleaned documents of both labels.
    pub fn compute(
        &self,
        hyperpartisan: Vec<Document>,
        non_hyperpartisan: Vec<Document>,
    ) -> Result<LogOddsRun> {
        self.compute_corpora(
            Corpus::new(Label::Hyperpartisan, hyperpartisan),
            Corpus::new(Label::NonHyperpartisan, non_hyperpartisan),
        )
    }

    /// Scores two prepared corpora. The corpora and their counts are
    /// dropped as soon as their odds tables exist.
    pub fn compute_corpora(
        &self,
        hyperpartisan: Corpus,
        non_hyperpartisan: Corpus,
    ) -> Result<LogOddsRun> {
        for corpus in [&hyperpartisan, &non_hyperpartisan] {
            if corpus.is_empty() {
                return Err(LogOddsError::Configuration(format!(
                    "the {} corpus contains no tokens",
                    corpus.label()
                )));
            }
        }

        let mut degenerate = DegenerateCounts::default();
        let (hyperpartisan_odds, hyperpartisan_vocabulary) =
            self.odds_for(hyperpartisan, &mut degenerate)?;
        let (non_hyperpartisan_odds, non_hyperpartisan_vocabulary) =
            self.odds_for(non_hyperpartisan, &mut degenerate)?;

        let mut vocabulary = hyperpartisan_vocabulary;
        vocabulary.extend(non_hyperpartisan_vocabulary);

        tracing::info!(
            "Calculating log-odd ratios for {} {}s",
            vocabulary.len(),
            self.granularity()
        );
        let bar = progress::bar(
            self.show_progress,
            vocabulary.len(),
            format!("Calculating {} log-odd ratios", self.granularity()),
        );
        let scores = score_vocabulary(
            vocabulary,
            &hyperpartisan_odds,
            &non_hyperpartisan_odds,
            &mut degenerate,
            &bar,
        );
        bar.finish_and_clear();

        if degenerate.degenerate_scores() > 0 {
            tracing::warn!(
                "{} of {} log-odd ratios are not finite (+inf: {}, -inf: {}, indeterminate: {})",
                degenerate.degenerate_scores(),
                scores.len(),
                degenerate.positive_infinite_scores,
                degenerate.negative_infinite_scores,
                degenerate.indeterminate_scores
            );
        }

        Ok(LogOddsRun {
            result: LogOddsResult::new(self.granularity(), scores),
            degenerate,
        })
    }

    fn odds_for(
        &self,
        corpus: Corpus,
        degenerate: &mut DegenerateCounts,
    ) -> Result<(OddsTable, Vocabulary)> {
        let (frequencies, vocabulary) = self.aggregator.aggregate(&corpus);
        tracing::debug!(
            "Most frequent {}s ({}): {:?}",
            self.granularity(),
            corpus.label(),
            frequencies.most_frequent(10)
        );
        let (odds, odds_degenerate) = OddsTable::derive(corpus, frequencies, self.show_progress)?;
        degenerate.merge(odds_degenerate);
        Ok((odds, vocabulary))
    }
}

fn score_vocabulary(
    vocabulary: Vocabulary,
    hyperpartisan: &OddsTable,
    non_hyperpartisan: &OddsTable,
    degenerate: &mut DegenerateCounts,
    bar: &ProgressBar,
) -> HashMap<Token, f64> {
    let mut scores = HashMap::with_capacity(vocabulary.len());
    for token in vocabulary {
        let odds_a = hyperpartisan.get(&token);
        let odds_b = non_hyperpartisan.get(&token);
        let score = log_odds_ratio(odds_a, odds_b);

        let kind = if score == f64::INFINITY {
            Some(DegenerateKind::PositiveInfiniteScore)
        } else if score == f64::NEG_INFINITY {
            Some(DegenerateKind::NegativeInfiniteScore)
        } else if log10_extended(odds_a).is_infinite() && log10_extended(odds_b).is_infinite() {
            Some(DegenerateKind::Indeterminate)
        } else {
            None
        };
        if let Some(kind) = kind {
            degenerate.record(DegenerateValueWarning::new(&token, kind));
        }

        scores.insert(token, score);
        bar.inc(1);
    }
    scores
}
