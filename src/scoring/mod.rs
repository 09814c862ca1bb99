// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers.
//!
//! `core` holds the similarity math, `ranking` the engine that runs a batch
//! through the vectorizer and orders the results.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::{compare_ranked, rank, Ranker};
