// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the JSON request path.
//!
//! Arbitrary bytes must either fail to parse or produce a response whose
//! scores line up with the request's candidates. Never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use talentvector::{RankRequest, Ranker};

fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<RankRequest>(data) else {
        return;
    };
    if request.candidates.len() > 64 {
        return;
    }
    let expected = request.candidates.len();
    let limit = request.limit;

    if let Ok(response) = Ranker::default().respond(request) {
        assert_eq!(response.scores.len(), expected);
        assert!(response.results.len() <= limit.unwrap_or(usize::MAX).min(expected));
        for pair in response.results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
            assert_eq!(pair[0].rank + 1, pair[1].rank);
        }
    }
});
