// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking engine: one query, N candidates, N scores.
//!
//! A call builds its vocabulary from exactly the documents it was handed
//! (query first, then candidates), so the same resume can score differently
//! next to a different set of resumes. IDF is a property of the batch.
//!
//! Sort order for [`Ranker::rank_candidates`]:
//! 1. **Score** - descending
//! 2. **Input position** - ascending, so ties keep the caller's order

use std::cmp::Ordering;

use crate::config::RankConfig;
use crate::error::Result;
use crate::types::{Candidate, RankRequest, RankResponse, RankedCandidate};
use crate::vectorize::TfIdfVectorizer;

use super::core::score_all;

/// Rank `candidates` against `query` with the default configuration.
///
/// `scores[i]` belongs to `candidates[i]`. An empty candidate list gives an
/// empty score list.
///
/// ```
/// let scores = talentvector::rank(
///     "python developer",
///     &["experienced python developer", "chef and baker"],
/// );
/// assert!(scores[0] > scores[1]);
/// assert_eq!(scores[1], 0.0);
/// ```
pub fn rank<S: AsRef<str> + Sync>(query: &str, candidates: &[S]) -> Vec<f64> {
    Ranker::default().rank(query, candidates)
}

/// Compare two ranked entries: higher score first, then lower input position.
pub fn compare_ranked(a: (usize, f64), b: (usize, f64)) -> Ordering {
    match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(&b.0),
        ord => ord,
    }
}

/// A ranking engine bound to one configuration.
///
/// Holds no per-call state; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: RankConfig,
    vectorizer: TfIdfVectorizer,
}

impl Ranker {
    pub fn new(config: RankConfig) -> Self {
        let vectorizer =
            TfIdfVectorizer::new(config.tokenizer.clone(), config.weighting.clone());
        Self { config, vectorizer }
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Similarity of each candidate to the query, index-aligned to `candidates`.
    pub fn rank<S: AsRef<str> + Sync>(&self, query: &str, candidates: &[S]) -> Vec<f64> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let mut batch: Vec<&str> = Vec::with_capacity(candidates.len() + 1);
        batch.push(query);
        batch.extend(candidates.iter().map(AsRef::as_ref));

        let fitted = self.vectorizer.fit_transform(&batch);
        let Some((query_vector, candidate_vectors)) = fitted.vectors.split_first() else {
            return vec![0.0; candidates.len()];
        };

        tracing::debug!(
            candidates = candidates.len(),
            vocabulary = fitted.vocabulary.len(),
            degenerate = fitted.vocabulary.is_empty(),
            empty_query = query_vector.is_zero(),
            "ranked batch"
        );

        score_all(query_vector, candidate_vectors)
    }

    /// Score candidates and sort them best first, ids attached.
    pub fn rank_candidates(&self, query: &str, candidates: &[Candidate]) -> Vec<RankedCandidate> {
        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        let scores = self.rank(query, &texts);
        order_candidates(candidates, &scores)
    }

    /// Like [`Ranker::rank_candidates`], keeping only the best `limit`.
    pub fn rank_top(
        &self,
        query: &str,
        candidates: &[Candidate],
        limit: usize,
    ) -> Vec<RankedCandidate> {
        let mut ranked = self.rank_candidates(query, candidates);
        ranked.truncate(limit);
        ranked
    }

    /// Answer a JSON-level request. A config inside the request replaces this
    /// ranker's configuration for that request.
    pub fn respond(&self, request: RankRequest) -> Result<RankResponse> {
        let override_ranker = match request.config {
            Some(config) => {
                config.validate()?;
                Some(Ranker::new(config))
            }
            None => None,
        };
        let ranker = override_ranker.as_ref().unwrap_or(self);

        let candidates: Vec<Candidate> = request
            .candidates
            .into_iter()
            .enumerate()
            .map(|(position, input)| input.into_candidate(position))
            .collect();

        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        let scores = ranker.rank(&request.query, &texts);
        let mut results = order_candidates(&candidates, &scores);
        if let Some(limit) = request.limit {
            results.truncate(limit);
        }

        Ok(RankResponse {
            job_title: request.job_title,
            scores,
            results,
        })
    }
}

/// Pair scores with their candidates and sort best first.
///
/// `scores[i]` must belong to `candidates[i]`.
pub(crate) fn order_candidates(candidates: &[Candidate], scores: &[f64]) -> Vec<RankedCandidate> {
    debug_assert_eq!(
        scores.len(),
        candidates.len(),
        "one score per candidate"
    );
    let mut indexed: Vec<(usize, f64)> = scores.iter().copied().enumerate().collect();
    indexed.sort_by(|a, b| compare_ranked(*a, *b));

    indexed
        .into_iter()
        .enumerate()
        .map(|(position, (index, score))| RankedCandidate {
            rank: position + 1,
            id: candidates[index].id.clone(),
            score,
        })
        .collect()
}
