// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF weights.
//!
//! Smoothed IDF pretends one extra document contains every term:
//!
//! ```text
//! idf(t) = ln((1 + N) / (1 + df(t))) + 1
//! ```
//!
//! The `+ 1` keeps terms that appear in every document from dropping to zero
//! weight. The smoothing keeps `df = 0` from dividing by zero, although a
//! term in the vocabulary always has `df >= 1`.

use serde::{Deserialize, Serialize};

use super::Vocabulary;

/// How raw term counts become weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightingConfig {
    /// Add one to document counts (numerator and denominator) before taking the log.
    pub smooth_idf: bool,
    /// Replace `tf` with `1 + ln(tf)`.
    pub sublinear_tf: bool,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
        }
    }
}

/// Inverse document frequency of a single term.
pub fn inverse_document_frequency(num_docs: usize, doc_freq: usize, smooth: bool) -> f64 {
    let (n, df) = if smooth {
        (num_docs as f64 + 1.0, doc_freq as f64 + 1.0)
    } else {
        (num_docs as f64, doc_freq as f64)
    };
    (n / df).ln() + 1.0
}

/// IDF for every vocabulary column.
pub fn idf_table(vocabulary: &Vocabulary, config: &WeightingConfig) -> Vec<f64> {
    (0..vocabulary.len())
        .map(|column| {
            inverse_document_frequency(
                vocabulary.num_docs(),
                vocabulary.document_frequency(column),
                config.smooth_idf,
            )
        })
        .collect()
}

/// Weight applied to a raw count before IDF scaling.
pub fn term_frequency(count: usize, sublinear: bool) -> f64 {
    if count == 0 {
        0.0
    } else if sublinear {
        1.0 + (count as f64).ln()
    } else {
        count as f64
    }
}
