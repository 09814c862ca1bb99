// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense term-weight vectors.

/// One coordinate per vocabulary column.
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector(Vec<f64>);

impl TermVector {
    pub fn zeros(dim: usize) -> Self {
        Self(vec![0.0; dim])
    }

    pub fn from_weights(weights: Vec<f64>) -> Self {
        Self(weights)
    }

    pub fn dim(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Euclidean length.
    pub fn norm(&self) -> f64 {
        self.0.iter().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&w| w == 0.0)
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for w in &mut self.0 {
                *w /= norm;
            }
        }
    }

    /// Sum of elementwise products. Both vectors must share a vocabulary.
    pub fn dot(&self, other: &TermVector) -> f64 {
        debug_assert_eq!(self.dim(), other.dim(), "vectors from different vocabularies");
        self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum()
    }
}
