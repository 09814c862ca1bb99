// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking configuration.
//!
//! Everything that changes how text turns into scores lives in one
//! [`RankConfig`]: the tokenizer and the weighting scheme. It reads from a
//! JSON file where every field is optional:
//!
//! ```json
//! {
//!   "tokenizer": { "stopWords": "english", "stripAccents": true },
//!   "weighting": { "sublinearTf": true }
//! }
//! ```
//!
//! The CLI layers its flags on top of whatever the file sets.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tokenize::TokenizerConfig;
use crate::vectorize::WeightingConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankConfig {
    pub tokenizer: TokenizerConfig,
    pub weighting: WeightingConfig,
}

impl RankConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: RankConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded rank configuration");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.tokenizer.min_token_len == 0 {
            return Err(Error::Config(
                "tokenizer.minTokenLen must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
