// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request and result types around the ranking engine.
//!
//! The engine itself only sees strings and positions. These types carry the
//! caller's identities (file names, resume ids) alongside, so a score can find
//! its way back to the document it belongs to.
//!
//! JSON uses camelCase, same as every other payload this crate reads or writes.

use serde::{Deserialize, Serialize};

use crate::config::RankConfig;

/// A candidate document with a caller-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub text: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// A candidate's place in the ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// 1-based position after sorting by descending score.
    pub rank: usize,
    pub id: String,
    pub score: f64,
}

/// Candidates in a JSON request: bare text or text with an id.
///
/// Bare strings get their position as id ("0", "1", ...).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CandidateInput {
    Text(String),
    Document(Candidate),
}

impl CandidateInput {
    pub fn into_candidate(self, position: usize) -> Candidate {
        match self {
            CandidateInput::Text(text) => Candidate::new(position.to_string(), text),
            CandidateInput::Document(candidate) => candidate,
        }
    }
}

/// One ranking request, as read by `talentvector score`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    /// The job description.
    pub query: String,
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
    #[serde(default)]
    pub job_title: Option<String>,
    /// Overrides the ranker's configuration for this request only.
    #[serde(default)]
    pub config: Option<RankConfig>,
    /// Keep only the best `limit` entries in `results`. `scores` is never truncated.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// The answer to a [`RankRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    /// Index-aligned with the request's candidates.
    pub scores: Vec<f64>,
    /// Sorted by descending score.
    pub results: Vec<RankedCandidate>,
}
