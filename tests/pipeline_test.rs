//! End-to-end tests: article dumps -> scores -> store -> ranking.

use log_odds_core::preprocess::{load_clean_documents, remove_infrequent_words, DEFAULT_ARTICLE_END};
use log_odds_core::{top_tokens, Granularity, Label, LogOddsEngine, LogOddsError, ResultStore, Token};
use std::fs;
use std::path::Path;

fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|d| d.iter().map(|w| w.to_string()).collect())
        .collect()
}

fn write_dump(path: &Path, bodies: &[&str]) {
    let mut content = String::new();
    for (i, body) in bodies.iter().enumerate() {
        content.push_str(&format!("ID: {} ----> Title: Article {}\n\n", i, i));
        content.push_str(body);
        content.push_str("\n\n");
        content.push_str(DEFAULT_ARTICLE_END);
        content.push('\n');
    }
    fs::write(path, content).unwrap();
}

#[test]
fn store_round_trip_keeps_infinite_scores() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path().join("nested"));

    let run = LogOddsEngine::new(Granularity::Unigram)
        .compute(docs(&[&["a", "b"], &["a"]]), docs(&[&["b", "c"]]))
        .unwrap();
    store.save(&run.result).unwrap();

    let loaded = store.load(Granularity::Unigram).unwrap();
    assert_eq!(loaded, run.result);
    assert_eq!(loaded.get(&Token::from("a")), Some(f64::INFINITY));
    assert_eq!(loaded.get(&Token::from("c")), Some(f64::NEG_INFINITY));

    // saving again over the same file is fine
    store.save(&loaded).unwrap();
    assert_eq!(store.load(Granularity::Unigram).unwrap(), loaded);
}

#[test]
fn unigram_and_bigram_results_are_stored_separately() {
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::new(dir.path());
    let hyper = docs(&[&["fake", "news", "media"]]);
    let neutral = docs(&[&["news", "media", "report"]]);

    let unigrams = LogOddsEngine::new(Granularity::Unigram)
        .compute(hyper.clone(), neutral.clone())
        .unwrap()
        .result;
    let bigrams = LogOddsEngine::new(Granularity::Bigram)
        .compute(hyper, neutral)
        .unwrap()
        .result;
    store.save(&unigrams).unwrap();
    store.save(&bigrams).unwrap();

    assert_eq!(store.load(Granularity::Unigram).unwrap(), unigrams);
    assert_eq!(store.load(Granularity::Bigram).unwrap(), bigrams);
    assert_eq!(
        bigrams.get(&Token::from(("news", "media"))),
        Some(0.0)
    );
    assert_eq!(bigrams.get(&Token::from(("fake", "news"))), Some(f64::INFINITY));
}

#[test]
fn finite_entry_behind_infinite_one_is_still_returned() {
    let run = LogOddsEngine::new(Granularity::Unigram)
        .compute(docs(&[&["only", "shared"]]), docs(&[&["shared", "x", "y"]]))
        .unwrap();
    // only -> +inf, shared -> finite, x/y -> -inf
    let ranked = top_tokens(&run.result, Label::Hyperpartisan, 1, false);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].0, Token::from("shared"));

    let with_infinite = top_tokens(&run.result, Label::Hyperpartisan, 1, true);
    assert_eq!(with_infinite[0], (Token::from("only"), f64::INFINITY));
}

#[test]
fn article_dumps_to_ranked_tokens() {
    let dir = tempfile::tempdir().unwrap();
    let hyper_path = dir.path().join("hyperpartisan.txt");
    let neutral_path = dir.path().join("non-hyperpartisan.txt");
    write_dump(
        &hyper_path,
        &[
            "The corrupt media lies. The corrupt elite!",
            "Corrupt politicians and the media.",
        ],
    );
    write_dump(
        &neutral_path,
        &["The committee published the report.", "Media covered the report."],
    );

    let hyper = load_clean_documents(&hyper_path, DEFAULT_ARTICLE_END).unwrap();
    let neutral = load_clean_documents(&neutral_path, DEFAULT_ARTICLE_END).unwrap();
    assert_eq!(hyper.len(), 2);
    assert_eq!(neutral.len(), 2);
    assert_eq!(hyper[1], vec!["corrupt", "politicians", "media"]);

    let run = LogOddsEngine::new(Granularity::Unigram)
        .compute(hyper, neutral)
        .unwrap();
    let top_hyper = top_tokens(&run.result, Label::Hyperpartisan, 1, true);
    assert_eq!(top_hyper[0], (Token::from("corrupt"), f64::INFINITY));
    let top_neutral = top_tokens(&run.result, Label::NonHyperpartisan, 1, true);
    // equal -inf scores are ordered by token
    assert_eq!(top_neutral[0], (Token::from("committee"), f64::NEG_INFINITY));

    let ranked = top_tokens(&run.result, Label::Hyperpartisan, 10, false);
    assert!(ranked.iter().all(|(_, score)| score.is_finite()));
    assert_eq!(ranked[0].0, Token::from("media"));
}

#[test]
fn threshold_can_empty_a_corpus() {
    let (hyper, neutral) = remove_infrequent_words(
        docs(&[&["rare"]]),
        docs(&[&["common", "common"]]),
        2,
    );
    let err = LogOddsEngine::new(Granularity::Unigram)
        .compute(hyper, neutral)
        .unwrap_err();
    assert!(matches!(err, LogOddsError::Configuration(_)));
}
