// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use talentvector::{source, Candidate, CandidateInput, RankRequest, RankResponse, Ranker};

mod cli;
use cli::{display, logging, Cli, Commands, OutputFormat};

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Rank {
            job,
            job_text,
            title,
            resumes,
            limit,
            format,
            options,
        } => {
            let ranker = Ranker::new(options.resolve()?);
            let job_description = match (job, job_text) {
                (Some(path), _) => read_job_description(&path)?,
                (None, Some(text)) => text,
                (None, None) => String::new(),
            };
            run_rank(&ranker, &job_description, title, &resumes, limit, format)
        }
        Commands::Score {
            input,
            pretty,
            options,
        } => {
            let ranker = Ranker::new(options.resolve()?);
            run_score(&ranker, input.as_deref(), pretty)
        }
    }
}

/// The job description is required input: unlike a resume, failing to read it
/// is an error rather than diagnostic text.
fn read_job_description(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("Failed to read job description {}", path.display()))
}

#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

#[cfg(feature = "parallel")]
fn load_resumes(paths: &[PathBuf]) -> Vec<Candidate> {
    let progress = ProgressBar::new(paths.len() as u64);
    progress.set_style(create_progress_style());
    progress.set_prefix("Loading");
    progress.set_message("resumes...");
    source::load_candidates_with_progress(paths, &progress)
}

#[cfg(not(feature = "parallel"))]
fn load_resumes(paths: &[PathBuf]) -> Vec<Candidate> {
    source::load_candidates(paths)
}

fn run_rank(
    ranker: &Ranker,
    job_description: &str,
    title: Option<String>,
    resumes: &[PathBuf],
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let candidates = load_resumes(resumes);
    let total = candidates.len();
    tracing::info!(candidates = total, "ranking");

    let request = RankRequest {
        query: job_description.to_string(),
        candidates: candidates.into_iter().map(CandidateInput::Document).collect(),
        job_title: title,
        config: None,
        limit,
    };
    let response = ranker.respond(request)?;

    match format {
        OutputFormat::Table => {
            display::print_ranking(response.job_title.as_deref(), &response.results, total);
            Ok(())
        }
        OutputFormat::Json => write_json(&response, true),
    }
}

fn run_score(ranker: &Ranker, input: Option<&Path>, pretty: bool) -> Result<()> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read request {}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read stdin")?;
            raw
        }
    };

    let request: RankRequest = serde_json::from_str(&raw).context("Invalid request JSON")?;
    let response = ranker.respond(request)?;
    write_json(&response, pretty)
}

fn write_json(response: &RankResponse, pretty: bool) -> Result<()> {
    let serialized = if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
    .context("Failed to serialize response")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(serialized.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
