// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch TF-IDF vectorization.
//!
//! IDF needs every document before any vector can be weighted, so fitting and
//! transforming happen together over one batch. Nothing survives the call:
//! the vocabulary of the next batch starts from scratch.
//!
//! With the `parallel` feature, tokenizing and weighting each document runs on
//! the rayon pool. Each document is independent and `collect()` keeps input
//! order, so results are identical to the sequential path.

mod vector;
mod vocabulary;
mod weighting;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::tokenize::{Tokenizer, TokenizerConfig};

pub use vector::TermVector;
pub use vocabulary::Vocabulary;
pub use weighting::{idf_table, inverse_document_frequency, term_frequency, WeightingConfig};

/// Everything computed from one batch.
#[derive(Debug, Clone)]
pub struct FittedBatch {
    pub vocabulary: Vocabulary,
    pub idf: Vec<f64>,
    /// L2-normalized, one per input document, in input order.
    pub vectors: Vec<TermVector>,
}

/// Turns a batch of documents into L2-normalized TF-IDF vectors.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    tokenizer: Tokenizer,
    weighting: WeightingConfig,
}

impl TfIdfVectorizer {
    pub fn new(tokenizer: TokenizerConfig, weighting: WeightingConfig) -> Self {
        Self {
            tokenizer: Tokenizer::new(tokenizer),
            weighting,
        }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Fit a vocabulary to `documents` and vectorize each of them against it.
    pub fn fit_transform<S: AsRef<str> + Sync>(&self, documents: &[S]) -> FittedBatch {
        let tokenized = self.tokenize_all(documents);
        let vocabulary = Vocabulary::from_documents(&tokenized);
        let idf = idf_table(&vocabulary, &self.weighting);
        let vectors = self.weigh_all(&tokenized, &vocabulary, &idf);

        FittedBatch {
            vocabulary,
            idf,
            vectors,
        }
    }

    #[cfg(feature = "parallel")]
    fn tokenize_all<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<Vec<String>> {
        documents
            .par_iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn tokenize_all<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<Vec<String>> {
        documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn weigh_all(
        &self,
        tokenized: &[Vec<String>],
        vocabulary: &Vocabulary,
        idf: &[f64],
    ) -> Vec<TermVector> {
        tokenized
            .par_iter()
            .map(|tokens| self.weigh(tokens, vocabulary, idf))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn weigh_all(
        &self,
        tokenized: &[Vec<String>],
        vocabulary: &Vocabulary,
        idf: &[f64],
    ) -> Vec<TermVector> {
        tokenized
            .iter()
            .map(|tokens| self.weigh(tokens, vocabulary, idf))
            .collect()
    }

    /// TF × IDF for one document, then L2-normalized.
    fn weigh(&self, tokens: &[String], vocabulary: &Vocabulary, idf: &[f64]) -> TermVector {
        let mut counts = vec![0usize; vocabulary.len()];
        for token in tokens {
            // Every token of a batch document is in the batch vocabulary
            if let Some(column) = vocabulary.index_of(token) {
                counts[column] += 1;
            }
        }

        let weights = counts
            .iter()
            .zip(idf)
            .map(|(&count, &idf)| term_frequency(count, self.weighting.sublinear_tf) * idf)
            .collect();

        let mut vector = TermVector::from_weights(weights);
        vector.normalize();
        vector
    }
}
