// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text candidate loading.
//!
//! Resumes arrive as files. A file that can't be read does not abort the
//! ranking: it becomes a short diagnostic string and gets ranked like any
//! other text (it will simply score low). An empty file gets the
//! "no readable text" marker. The engine never validates what it's given.
//!
//! Loading is embarrassingly parallel; with the `parallel` feature the files
//! are read on the rayon pool. Results keep the order of the input paths.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::types::Candidate;

/// Stand-in text for a document with nothing but whitespace in it.
pub const NO_READABLE_TEXT: &str = "No readable text found.";

/// Stand-in text for a document that could not be read.
pub fn extraction_error(err: &dyn std::fmt::Display) -> String {
    format!("Error extracting text: {}", err)
}

/// Read a document as text. Never fails; see the module docs.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn load_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => {
            let text = String::from_utf8_lossy(&bytes);
            let trimmed = text.trim();
            if trimmed.is_empty() {
                tracing::warn!(path = %path.display(), "no readable text");
                NO_READABLE_TEXT.to_string()
            } else {
                trimmed.to_string()
            }
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read candidate");
            extraction_error(&err)
        }
    }
}

/// Identity of a candidate loaded from `path`: its file name.
pub fn candidate_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load every path as a candidate, in input order.
#[cfg(feature = "parallel")]
pub fn load_candidates(paths: &[PathBuf]) -> Vec<Candidate> {
    paths
        .par_iter()
        .map(|path| Candidate::new(candidate_id(path), load_text(path)))
        .collect()
}

/// Load every path as a candidate, in input order.
#[cfg(not(feature = "parallel"))]
pub fn load_candidates(paths: &[PathBuf]) -> Vec<Candidate> {
    paths
        .iter()
        .map(|path| Candidate::new(candidate_id(path), load_text(path)))
        .collect()
}

/// Load candidates in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_candidates_with_progress(paths: &[PathBuf], progress: &ProgressBar) -> Vec<Candidate> {
    let counter = AtomicUsize::new(0);
    let total = paths.len();

    let candidates = paths
        .par_iter()
        .map(|path| {
            let candidate = Candidate::new(candidate_id(path), load_text(path));

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            candidate
        })
        .collect();

    progress.finish_with_message(format!("loaded {} candidates", total));
    candidates
}
