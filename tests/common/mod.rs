//! Shared test utilities and fixtures.

#![allow(dead_code)]

use talentvector::Candidate;

/// Tolerance for "equal up to floating-point rounding".
pub const EPSILON: f64 = 1e-9;

/// A job description used across suites.
pub const BACKEND_JOB: &str = "Backend engineer: Rust, PostgreSQL, Kubernetes. \
     Design and operate distributed systems. Experience with Rust async and gRPC.";

/// Resumes with a known intended ordering against [`BACKEND_JOB`].
pub fn backend_resumes() -> Vec<Candidate> {
    vec![
        Candidate::new(
            "pastry_chef.txt",
            "Pastry chef with ten years in French bakeries. Croissants, sourdough, plating.",
        ),
        Candidate::new(
            "rust_backend.txt",
            "Senior backend engineer. Rust async services with gRPC, PostgreSQL, \
             Kubernetes deployments. Operated distributed systems at scale.",
        ),
        Candidate::new(
            "frontend.txt",
            "Frontend engineer. React, TypeScript, CSS. Some experience with backend APIs.",
        ),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {} ± {}, got {}",
        expected,
        EPSILON,
        actual
    );
}

pub fn assert_valid_scores(scores: &[f64]) {
    for (i, score) in scores.iter().enumerate() {
        assert!(score.is_finite(), "score {} is not finite: {}", i, score);
        assert!(
            (0.0..=1.0).contains(score),
            "score {} out of [0, 1]: {}",
            i,
            score
        );
    }
}
