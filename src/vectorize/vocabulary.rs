// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The coordinate space of one batch.
//!
//! Terms are sorted before they get column indices. Any consistent assignment
//! would give the same scores, but sorted order keeps vectors reproducible and
//! easy to eyeball in a debugger.

use std::collections::{BTreeMap, HashSet};

/// Distinct terms across a batch plus how many documents contain each one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: BTreeMap<String, usize>,
    doc_freq: Vec<usize>,
    num_docs: usize,
}

impl Vocabulary {
    /// Build from tokenized documents. `documents[i]` holds the tokens of
    /// document `i`, duplicates allowed.
    pub fn from_documents(documents: &[Vec<String>]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in documents {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms = Vec::with_capacity(counts.len());
        let mut index = BTreeMap::new();
        let mut doc_freq = Vec::with_capacity(counts.len());
        // BTreeMap iterates in sorted order, so column = rank of the term
        for (column, (term, df)) in counts.into_iter().enumerate() {
            terms.push(term.to_string());
            index.insert(term.to_string(), column);
            doc_freq.push(df);
        }

        Self {
            terms,
            index,
            doc_freq,
            num_docs: documents.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Number of documents the vocabulary was built from.
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Column index of `term`, if the batch contains it.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    /// Terms in column order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// How many documents contain the term at `column` at least once.
    pub fn document_frequency(&self, column: usize) -> usize {
        self.doc_freq[column]
    }
}
