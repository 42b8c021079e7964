// File: src/ranking.rs
use crate::core::result::LogOddsResult;
use crate::core::types::{Label, Token};
use std::cmp::Ordering;

/// Returns up to `amount` tokens most typical of `label`.
///
/// Hyperpartisan ranks by score descending, non-hyperpartisan ascending.
/// Equal scores are ordered by token. With `include_infinite == false`
/// non-finite scores are dropped before truncation, so finite entries
/// move up to fill their places.
pub fn top_tokens(
    result: &LogOddsResult,
    label: Label,
    amount: usize,
    include_infinite: bool,
) -> Vec<(Token, f64)> {
    let mut ranked: Vec<(Token, f64)> = result
        .iter()
        .filter(|(_, score)| include_infinite || score.is_finite())
        .map(|(token, score)| (token.clone(), score))
        .collect();

    ranked.sort_by(|a, b| by_label(label, a.1, b.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(amount);

    tracing::debug!(
        "Selected {} of {} {}s for {}",
        ranked.len(),
        result.len(),
        result.granularity(),
        label
    );
    ranked
}

fn by_label(label: Label, a: f64, b: f64) -> Ordering {
    match label {
        Label::Hyperpartisan => b.total_cmp(&a),
        Label::NonHyperpartisan => a.total_cmp(&b),
    }
}
