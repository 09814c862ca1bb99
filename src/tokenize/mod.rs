// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text to terms.
//!
//! A token is a maximal run of word characters (Unicode alphanumerics plus
//! `_`). By default tokens are lowercased and anything shorter than two
//! characters is dropped, so "C" and "a" vanish while "c++" becomes "c" and
//! then vanishes too. For Latin, Greek and Cyrillic text this matches the
//! classic `\b\w\w+\b` token pattern. Scripts written with vowel signs
//! (Devanagari, for one) can split differently, since `char::is_alphanumeric`
//! and a regex `\w` disagree on those marks.
//!
//! Every document in a batch goes through the same [`Tokenizer`]. Mixing
//! configurations inside a batch would make the vocabulary meaningless.

pub mod stop_words;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::utils::{is_word_char, strip_accents};

/// Which stop word list, if any, removes terms before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    #[default]
    None,
    English,
}

/// How text becomes terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenizerConfig {
    /// Lowercase before splitting.
    pub lowercase: bool,
    /// Decompose and drop combining marks ("résumé" → "resume").
    pub strip_accents: bool,
    /// Tokens with fewer characters than this are discarded. Must be at least 1.
    pub min_token_len: usize,
    pub stop_words: StopWords,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_accents: false,
            min_token_len: 2,
            stop_words: StopWords::None,
        }
    }
}

/// Splits documents into terms according to a [`TokenizerConfig`].
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Tokens in text order, duplicates kept (term frequency needs them).
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut prepared = if self.config.strip_accents {
            strip_accents(text)
        } else {
            text.to_string()
        };
        if self.config.lowercase {
            prepared = prepared.to_lowercase();
        }

        let min_len = self.config.min_token_len.max(1);
        prepared
            .split(|c: char| !is_word_char(c))
            .filter(|token| !token.is_empty())
            .filter(|token| token.chars().count() >= min_len)
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        match self.config.stop_words {
            StopWords::None => false,
            // The list is lowercase; compare case-insensitively when the
            // tokenizer keeps case.
            StopWords::English if self.config.lowercase => {
                stop_words::is_english_stop_word(token)
            }
            StopWords::English => stop_words::is_english_stop_word(&token.to_lowercase()),
        }
    }
}
