// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the talentvector command-line interface.
//!
//! Two subcommands: `rank` reads a job description and resume files and
//! prints a ranked table (or JSON), `score` answers a JSON request from stdin
//! for callers that would rather not touch the filesystem.

pub mod display;
pub mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use talentvector::{RankConfig, StopWords};

#[derive(Parser)]
#[command(
    name = "talentvector",
    about = "Rank resumes against a job description by TF-IDF similarity",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank resume files against a job description
    Rank {
        /// File containing the job description
        #[arg(short, long, required_unless_present = "job_text", conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description given inline
        #[arg(long)]
        job_text: Option<String>,

        /// Job title shown above the results
        #[arg(short, long)]
        title: Option<String>,

        /// Plain-text resume files
        #[arg(required = true)]
        resumes: Vec<PathBuf>,

        /// Show only the best N candidates
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        #[command(flatten)]
        options: RankOptions,
    },

    /// Answer a JSON ranking request
    ///
    /// Reads `{"query": ..., "candidates": [...]}` and writes
    /// `{"scores": [...], "results": [...]}`. Candidates may be bare strings
    /// or `{"id": ..., "text": ...}` objects.
    Score {
        /// Read the request from a file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,

        #[command(flatten)]
        options: RankOptions,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Flags that tune tokenization and weighting. They override `--config`.
#[derive(Args, Debug, Default)]
pub struct RankOptions {
    /// JSON configuration file
    #[arg(long, env = "TALENTVECTOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Remove stop words before weighting
    #[arg(long, value_enum)]
    pub stop_words: Option<StopWords>,

    /// Discard tokens shorter than this many characters
    #[arg(long)]
    pub min_token_len: Option<usize>,

    /// Fold accented characters to their base letters
    #[arg(long)]
    pub strip_accents: bool,

    /// Keep case instead of lowercasing
    #[arg(long)]
    pub keep_case: bool,

    /// Use 1 + ln(tf) instead of raw term counts
    #[arg(long)]
    pub sublinear_tf: bool,

    /// Use ln(N / df) + 1 instead of the smoothed IDF
    #[arg(long)]
    pub no_smooth_idf: bool,
}

impl RankOptions {
    /// Configuration file (if any) with command-line flags applied on top.
    pub fn resolve(&self) -> talentvector::Result<RankConfig> {
        let mut config = match &self.config {
            Some(path) => RankConfig::from_file(path)?,
            None => RankConfig::default(),
        };

        if let Some(stop_words) = self.stop_words {
            config.tokenizer.stop_words = stop_words;
        }
        if let Some(min_token_len) = self.min_token_len {
            config.tokenizer.min_token_len = min_token_len;
        }
        if self.strip_accents {
            config.tokenizer.strip_accents = true;
        }
        if self.keep_case {
            config.tokenizer.lowercase = false;
        }
        if self.sublinear_tf {
            config.weighting.sublinear_tf = true;
        }
        if self.no_smooth_idf {
            config.weighting.smooth_idf = false;
        }

        config.validate()?;
        Ok(config)
    }
}
