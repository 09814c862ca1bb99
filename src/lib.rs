//! Rank resumes against a job description by TF-IDF cosine similarity.
//!
//! One call, one batch: the job description and every resume are tokenized
//! together, a vocabulary is built from exactly those documents, each document
//! becomes an L2-normalized TF-IDF vector, and each resume is scored by its
//! cosine similarity to the job description.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ tokenize    │────▶│  vectorize   │────▶│  scoring    │
//! │ (Tokenizer, │     │ (Vocabulary, │     │  (rank,     │
//! │  StopWords) │     │  TermVector) │     │   Ranker)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        ▲                                        │
//!        │                                        ▼
//! ┌─────────────┐                          ┌─────────────┐
//! │ config      │                          │ types       │
//! │ (RankConfig)│                          │ (Ranked-    │
//! └─────────────┘                          │  Candidate) │
//!                                          └─────────────┘
//! ```
//!
//! `source` loads plain-text candidates from disk for the CLI.
//!
//! # Usage
//!
//! ```
//! use talentvector::{rank, Candidate, Ranker};
//!
//! let scores = rank("python developer", &["senior python developer", "pastry chef"]);
//! assert_eq!(scores.len(), 2);
//! assert!(scores[0] > scores[1]);
//!
//! let ranked = Ranker::default().rank_candidates(
//!     "python developer",
//!     &[Candidate::new("chef.txt", "pastry chef"), Candidate::new("dev.txt", "python dev")],
//! );
//! assert_eq!(ranked[0].id, "dev.txt");
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod scoring;
pub mod source;
pub mod tokenize;
mod types;
mod utils;
pub mod vectorize;

// Re-exports for public API
pub use config::RankConfig;
pub use error::{Error, Result};
pub use scoring::{cosine_similarity, rank, Ranker, MAX_SCORE, MIN_SCORE};
pub use tokenize::{StopWords, Tokenizer, TokenizerConfig};
pub use types::{Candidate, CandidateInput, RankRequest, RankResponse, RankedCandidate};
pub use utils::strip_accents;
pub use vectorize::{FittedBatch, TermVector, TfIdfVectorizer, Vocabulary, WeightingConfig};
