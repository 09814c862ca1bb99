//! Batches with nothing to vectorize.
//!
//! These must come back as zeros, never NaN and never a panic.

use talentvector::{rank, RankConfig, Ranker, StopWords};

#[test]
fn all_empty_batch_scores_zero() {
    assert_eq!(rank("", &["", ""]), vec![0.0, 0.0]);
}

#[test]
fn punctuation_only_batch_scores_zero() {
    assert_eq!(rank("!!!", &["...", "---", "?"]), vec![0.0, 0.0, 0.0]);
}

#[test]
fn single_character_tokens_only_scores_zero() {
    assert_eq!(rank("a b c", &["x y z", "1 2 3"]), vec![0.0, 0.0]);
}

#[test]
fn empty_query_scores_zero_against_real_text() {
    assert_eq!(rank("", &["rust developer", "go"]), vec![0.0, 0.0]);
    assert_eq!(rank("   \n\t", &["rust developer"]), vec![0.0]);
}

#[test]
fn empty_candidate_scores_zero_next_to_real_ones() {
    let scores = rank("rust developer", &["", "rust developer"]);
    assert_eq!(scores[0], 0.0);
    assert!(scores[1] > 0.99);
}

#[test]
fn stop_word_only_batch_scores_zero() {
    let mut config = RankConfig::default();
    config.tokenizer.stop_words = StopWords::English;
    let scores = Ranker::new(config).rank("the and of", &["with the", "to be or not"]);
    assert_eq!(scores, vec![0.0, 0.0]);
}

#[test]
fn diagnostic_text_is_ranked_like_any_other_text() {
    let scores = rank(
        "rust developer",
        &["Error extracting text: permission denied", "No readable text found."],
    );
    assert_eq!(scores, vec![0.0, 0.0]);
}
