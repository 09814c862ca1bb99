// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind the scores.
//!
//! Every vector coming out of the vectorizer is either unit length or zero, so
//! cosine similarity is just a dot product. TF-IDF weights are non-negative,
//! which keeps the result in [0, 1].
//!
//! # Degenerate batches
//!
//! If the query has no terms (empty, punctuation only, all stop words), its
//! vector is zero and every candidate scores 0.0. The same holds when the
//! whole batch has no terms and the vocabulary is empty. Nothing divides by a
//! zero norm on the way there.

use crate::vectorize::TermVector;

/// Lowest possible score.
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible score: a candidate proportional to the query.
pub const MAX_SCORE: f64 = 1.0;

/// Cosine similarity of two L2-normalized (or zero) vectors.
///
/// Clamped into [`MIN_SCORE`, `MAX_SCORE`] so rounding can't produce
/// 1.0000000000000002 for identical documents.
pub fn cosine_similarity(query: &TermVector, candidate: &TermVector) -> f64 {
    if query.is_zero() || candidate.is_zero() {
        return MIN_SCORE;
    }
    query.dot(candidate).clamp(MIN_SCORE, MAX_SCORE)
}

/// Score every candidate vector against the query vector, in order.
pub fn score_all(query: &TermVector, candidates: &[TermVector]) -> Vec<f64> {
    candidates
        .iter()
        .map(|candidate| cosine_similarity(query, candidate))
        .collect()
}
