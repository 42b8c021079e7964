// src/core/frequency.rs
use crate::core::corpus::Corpus;
use crate::core::progress;
use crate::core::types::{Granularity, Token, Vocabulary};
use std::collections::HashMap;

/// Occurrence counts of every token of one corpus.
/// Missing tokens read as 0.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
}

impl FrequencyTable {
    pub fn get(&self, token: &Token) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Sum of all counts. Equals the corpus token total for unigrams.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> {
        self.counts.iter().map(|(token, &count)| (token, count))
    }

    /// The `n` most frequent tokens, count descending then token ascending.
    pub fn most_frequent(&self, n: usize) -> Vec<(Token, u64)> {
        let mut entries: Vec<(Token, u64)> = self
            .counts
            .iter()
            .map(|(token, &count)| (token.clone(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    fn increment(&mut self, token: Token) {
        *self.counts.entry(token).or_insert(0) += 1;
    }
}

/// Counts unigrams or bigrams over a corpus.
pub struct FrequencyAggregator {
    granularity: Granularity,
    show_progress: bool,
}

impl FrequencyAggregator {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            show_progress: false,
        }
    }

    /// Draws a progress bar over the documents while counting.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Counts every token of `corpus` and returns the counts together with
    /// the distinct tokens seen, which the caller merges into the run's
    /// vocabulary. Bigrams are formed inside one document only.
    pub fn aggregate(&self, corpus: &Corpus) -> (FrequencyTable, Vocabulary) {
        let mut table = FrequencyTable::default();
        let bar = progress::bar(
            self.show_progress,
            corpus.document_count(),
            format!("Counting {}s for {}", self.granularity, corpus.label()),
        );

        for document in corpus.documents() {
            match self.granularity {
                Granularity::Unigram => {
                    for word in document {
                        table.increment(Token::Unigram(word.clone()));
                    }
                }
                Granularity::Bigram => {
                    for pair in document.windows(2) {
                        table.increment(Token::Bigram(pair[0].clone(), pair[1].clone()));
                    }
                }
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        let vocabulary: Vocabulary = table.counts.keys().cloned().collect();
        tracing::debug!(
            "Counted {} distinct {}s over {} documents ({})",
            vocabulary.len(),
            self.granularity,
            corpus.document_count(),
            corpus.label()
        );
        (table, vocabulary)
    }
}
