// src/core/corpus.rs
use crate::core::types::{Document, Label};

/// All cleaned documents of one label. Immutable once built; the token
/// total is computed up front since every probability divides by it.
#[derive(Debug, Clone)]
pub struct Corpus {
    label: Label,
    documents: Vec<Document>,
    total_token_count: usize,
}

impl Corpus {
    pub fn new(label: Label, documents: Vec<Document>) -> Self {
        let total_token_count = documents.iter().map(Vec::len).sum();
        Self {
            label,
            documents,
            total_token_count,
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    pub fn total_token_count(&self) -> usize {
        self.total_token_count
    }

    pub fn is_empty(&self) -> bool {
        self.total_token_count == 0
    }
}
