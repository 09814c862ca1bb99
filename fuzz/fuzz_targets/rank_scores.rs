// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Any query against any candidates must give one finite score per candidate,
//! each in [0, 1], and the same scores when run again.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use talentvector::{RankConfig, Ranker, StopWords};

#[derive(Debug, Arbitrary)]
struct Input {
    query: String,
    candidates: Vec<String>,
    lowercase: bool,
    strip_accents: bool,
    english_stop_words: bool,
    min_token_len: u8,
    smooth_idf: bool,
    sublinear_tf: bool,
}

fuzz_target!(|input: Input| {
    if input.candidates.len() > 64 {
        return;
    }

    let mut config = RankConfig::default();
    config.tokenizer.lowercase = input.lowercase;
    config.tokenizer.strip_accents = input.strip_accents;
    config.tokenizer.min_token_len = usize::from(input.min_token_len % 6).max(1);
    config.tokenizer.stop_words = if input.english_stop_words {
        StopWords::English
    } else {
        StopWords::None
    };
    config.weighting.smooth_idf = input.smooth_idf;
    config.weighting.sublinear_tf = input.sublinear_tf;
    let ranker = Ranker::new(config);

    let first = ranker.rank(&input.query, &input.candidates);
    let second = ranker.rank(&input.query, &input.candidates);

    assert_eq!(first.len(), input.candidates.len());
    for score in &first {
        assert!(score.is_finite(), "non-finite score {}", score);
        assert!((0.0..=1.0).contains(score), "score out of range: {}", score);
    }
    assert!(
        first.iter().zip(&second).all(|(a, b)| a.to_bits() == b.to_bits()),
        "ranking is not deterministic"
    );
});
