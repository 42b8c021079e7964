// File: src/preprocess.rs
//! Turns the per-label article dumps into cleaned token sequences.

use crate::core::types::Document;
use crate::error::Result;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// Line closing every article in the text dumps.
pub const DEFAULT_ARTICLE_END: &str = "<<END OF ARTICLE>>";

/// Lines before the body of an article: the id/title line and a blank line.
const HEADER_LINES: usize = 2;

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

fn stop_words() -> &'static HashSet<&'static str> {
    static SET: OnceLock<HashSet<&'static str>> = OnceLock::new();
    SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

pub fn is_stop_word(word: &str) -> bool {
    stop_words().contains(word.to_lowercase().as_str())
}

/// Splits an article dump into article bodies. Blank body lines are skipped
/// and the rest joined with single spaces. A final article without its end
/// marker is dropped.
pub fn parse_articles<R: BufRead>(reader: R, end_marker: &str) -> io::Result<Vec<String>> {
    let mut articles = Vec::new();
    let mut line_index = 0;
    let mut body: Vec<String> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line_index < HEADER_LINES {
            line_index += 1;
            continue;
        }
        if line == end_marker {
            articles.push(body.join(" "));
            body.clear();
            line_index = 0;
            continue;
        }
        if !line.is_empty() {
            body.push(line.to_string());
        }
        line_index += 1;
    }

    if !body.is_empty() {
        tracing::warn!("Dropping trailing article without '{}' marker", end_marker);
    }
    Ok(articles)
}

pub fn read_articles(path: &Path, end_marker: &str) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let articles = parse_articles(BufReader::new(file), end_marker)?;
    tracing::info!("Read {} articles from {}", articles.len(), path.display());
    Ok(articles)
}

/// Word tokens of `text` by Unicode word boundaries, keeping contractions
/// and possessives whole ("don't", "Trump's"). Typographic apostrophes are
/// folded to `'` so both spellings give the same token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|word| word.replace(['\u{2019}', '\u{2018}', '\u{02BC}'], "'"))
        .collect()
}

/// Tokenizes, drops stop words and lowercases one article.
pub fn clean_document(text: &str) -> Document {
    tokenize(text)
        .into_iter()
        .filter(|word| !is_stop_word(word))
        .map(|word| word.to_lowercase())
        .collect()
}

/// Reads and cleans every article of one dump.
pub fn load_clean_documents(path: &Path, end_marker: &str) -> Result<Vec<Document>> {
    let articles = read_articles(path, end_marker)?;
    Ok(articles.iter().map(|a| clean_document(a)).collect())
}

/// Drops every token seen fewer than `threshold` times across both label
/// corpora. Documents keep their count and order, possibly ending up empty.
pub fn remove_infrequent_words(
    hyperpartisan: Vec<Document>,
    non_hyperpartisan: Vec<Document>,
    threshold: usize,
) -> (Vec<Document>, Vec<Document>) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for word in hyperpartisan.iter().chain(non_hyperpartisan.iter()).flatten() {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }

    let keep = |documents: Vec<Document>| -> Vec<Document> {
        documents
            .into_iter()
            .map(|document| {
                document
                    .into_iter()
                    .filter(|word| counts.get(word).copied().unwrap_or(0) >= threshold)
                    .collect()
            })
            .collect()
    };

    let result = (keep(hyperpartisan), keep(non_hyperpartisan));
    tracing::debug!(
        "Removed tokens seen fewer than {} times ({} distinct tokens before)",
        threshold,
        counts.len()
    );
    result
}
