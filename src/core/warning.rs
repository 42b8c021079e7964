// src/core/warning.rs
use crate::core::types::{Label, Token};
use std::fmt;

/// Why a value left the finite range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateKind {
    /// The token makes up the whole corpus of this label (probability 1).
    InfiniteOdds(Label),
    /// Seen only in hyperpartisan documents, or infinitely likely there.
    PositiveInfiniteScore,
    /// Seen only in non-hyperpartisan documents, or infinitely likely there.
    NegativeInfiniteScore,
    /// Both log terms had the same infinite value; the score fell back to 0.
    Indeterminate,
}

/// A non-fatal notice that a token's odds or score is not finite.
/// Expected on real data; logged at debug level, never raised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DegenerateValueWarning<'a> {
    pub token: &'a Token,
    pub kind: DegenerateKind,
}

impl<'a> DegenerateValueWarning<'a> {
    pub fn new(token: &'a Token, kind: DegenerateKind) -> Self {
        Self { token, kind }
    }

    pub fn log(&self) {
        tracing::debug!("{}", self);
    }
}

impl fmt::Display for DegenerateValueWarning<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DegenerateKind::InfiniteOdds(label) => {
                write!(f, "'{}' has probability 1 in {} (infinite odds)", self.token, label)
            }
            DegenerateKind::PositiveInfiniteScore => {
                write!(f, "'{}' scored +inf", self.token)
            }
            DegenerateKind::NegativeInfiniteScore => {
                write!(f, "'{}' scored -inf", self.token)
            }
            DegenerateKind::Indeterminate => {
                write!(f, "'{}' has an indeterminate score, using 0", self.token)
            }
        }
    }
}

/// How many degenerate values a run met, per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DegenerateCounts {
    pub infinite_odds_hyperpartisan: usize,
    pub infinite_odds_non_hyperpartisan: usize,
    pub positive_infinite_scores: usize,
    pub negative_infinite_scores: usize,
    pub indeterminate_scores: usize,
}

impl DegenerateCounts {
    /// Logs `warning` and counts it.
    pub fn record(&mut self, warning: DegenerateValueWarning<'_>) {
        warning.log();
        match warning.kind {
            DegenerateKind::InfiniteOdds(Label::Hyperpartisan) => {
                self.infinite_odds_hyperpartisan += 1
            }
            DegenerateKind::InfiniteOdds(Label::NonHyperpartisan) => {
                self.infinite_odds_non_hyperpartisan += 1
            }
            DegenerateKind::PositiveInfiniteScore => self.positive_infinite_scores += 1,
            DegenerateKind::NegativeInfiniteScore => self.negative_infinite_scores += 1,
            DegenerateKind::Indeterminate => self.indeterminate_scores += 1,
        }
    }

    pub fn merge(&mut self, other: DegenerateCounts) {
        self.infinite_odds_hyperpartisan += other.infinite_odds_hyperpartisan;
        self.infinite_odds_non_hyperpartisan += other.infinite_odds_non_hyperpartisan;
        self.positive_infinite_scores += other.positive_infinite_scores;
        self.negative_infinite_scores += other.negative_infinite_scores;
        self.indeterminate_scores += other.indeterminate_scores;
    }

    /// Scores that are infinite or fell back from an indeterminate value.
    pub fn degenerate_scores(&self) -> usize {
        self.positive_infinite_scores + self.negative_infinite_scores + self.indeterminate_scores
    }

    pub fn total(&self) -> usize {
        self.infinite_odds_hyperpartisan + self.infinite_odds_non_hyperpartisan + self.degenerate_scores()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_per_kind() {
        let token = Token::from("x");
        let mut counts = DegenerateCounts::default();
        counts.record(DegenerateValueWarning::new(&token, DegenerateKind::PositiveInfiniteScore));
        counts.record(DegenerateValueWarning::new(&token, DegenerateKind::PositiveInfiniteScore));
        counts.record(DegenerateValueWarning::new(
            &token,
            DegenerateKind::InfiniteOdds(Label::NonHyperpartisan),
        ));

        assert_eq!(counts.positive_infinite_scores, 2);
        assert_eq!(counts.infinite_odds_non_hyperpartisan, 1);
        assert_eq!(counts.degenerate_scores(), 2);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn merge_adds_fields() {
        let mut a = DegenerateCounts {
            indeterminate_scores: 1,
            ..Default::default()
        };
        let b = DegenerateCounts {
            indeterminate_scores: 2,
            negative_infinite_scores: 4,
            ..Default::default()
        };
        a.merge(b);
        assert_eq!(a.indeterminate_scores, 3);
        assert_eq!(a.negative_infinite_scores, 4);
    }

    #[test]
    fn display_names_the_label() {
        let token = Token::from(("fake", "news"));
        let warning =
            DegenerateValueWarning::new(&token, DegenerateKind::InfiniteOdds(Label::Hyperpartisan));
        assert_eq!(
            warning.to_string(),
            "'(fake, news)' has probability 1 in Hyperpartisan (infinite odds)"
        );
    }
}
