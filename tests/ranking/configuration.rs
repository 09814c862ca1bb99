//! Tokenizer and weighting options change scores the way they claim to.

use super::common::assert_close;
use talentvector::{RankConfig, Ranker, StopWords};

fn ranker_with(edit: impl FnOnce(&mut RankConfig)) -> Ranker {
    let mut config = RankConfig::default();
    edit(&mut config);
    Ranker::new(config)
}

#[test]
fn stop_words_remove_shared_filler() {
    let query = "the rust developer";
    let candidates = ["the chef of the kitchen"];

    assert!(Ranker::default().rank(query, &candidates)[0] > 0.0);

    let stopped = ranker_with(|c| c.tokenizer.stop_words = StopWords::English);
    assert_eq!(stopped.rank(query, &candidates), vec![0.0]);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn strip_accents_folds_resume_spellings() {
    let candidates = ["resume writer"];
    assert_eq!(Ranker::default().rank("résumé", &candidates), vec![0.0]);

    let folded = ranker_with(|c| c.tokenizer.strip_accents = true);
    assert!(folded.rank("résumé", &candidates)[0] > 0.0);
    assert_close(folded.rank("Résumé", &["resume"])[0], 1.0);
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn strip_accents_folds_non_latin_marks() {
    let vocalized_arabic = "\u{0645}\u{064F}\u{062D}\u{064E}\u{0645}\u{064E}\u{0651}\u{062F}";
    let plain_arabic = "\u{0645}\u{062D}\u{0645}\u{062F}";
    let pointed_hebrew = "\u{05E9}\u{05B8}\u{05C1}\u{05DC}\u{05D5}\u{05B9}\u{05DD}";
    let plain_hebrew = "\u{05E9}\u{05DC}\u{05D5}\u{05DD}";

    assert_eq!(Ranker::default().rank(vocalized_arabic, &[plain_arabic]), vec![0.0]);

    let folded = ranker_with(|c| c.tokenizer.strip_accents = true);
    assert_close(folded.rank(vocalized_arabic, &[plain_arabic])[0], 1.0);
    assert_close(folded.rank(pointed_hebrew, &[plain_hebrew])[0], 1.0);
}

#[test]
fn keep_case_distinguishes_capitalization() {
    assert_close(Ranker::default().rank("Rust", &["rust"])[0], 1.0);

    let cased = ranker_with(|c| c.tokenizer.lowercase = false);
    assert_eq!(cased.rank("Rust", &["rust"]), vec![0.0]);
}

#[test]
fn min_token_len_one_keeps_single_letter_languages() {
    let query = "C developer";
    let candidates = ["C programmer"];
    assert_eq!(Ranker::default().rank(query, &candidates), vec![0.0]);

    let short = ranker_with(|c| c.tokenizer.min_token_len = 1);
    assert!(short.rank(query, &candidates)[0] > 0.0);
}

#[test]
fn sublinear_tf_damps_repetition() {
    let query = "rust rust rust go java";
    let candidates = ["rust go", "java python"];

    let linear = Ranker::default().rank(query, &candidates);
    assert_close(linear[0], 0.852_802_865_422_441_8);
    assert_close(linear[1], 0.182_519_442_617_271_24);

    let sublinear = ranker_with(|c| c.weighting.sublinear_tf = true).rank(query, &candidates);
    assert_close(sublinear[0], 0.865_806_207_427_924_5);
    assert_close(sublinear[1], 0.239_207_025_401_592_1);
}

#[test]
fn unsmoothed_idf_weighs_rare_terms_harder() {
    let query = "rust developer";
    let candidates = ["rust developer senior", "go"];

    let smooth = Ranker::default().rank(query, &candidates);
    assert_close(smooth[0], 0.732_359_142_842_214_8);

    let raw = ranker_with(|c| c.weighting.smooth_idf = false).rank(query, &candidates);
    assert_close(raw[0], 0.687_647_791_717_742_7);
    assert_eq!(raw[1], 0.0);
}

#[test]
fn config_file_drives_the_ranker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("talentvector.json");
    std::fs::write(
        &path,
        r#"{"tokenizer": {"stopWords": "english", "minTokenLen": 3}, "weighting": {"sublinearTf": true}}"#,
    )
    .unwrap();

    let config = RankConfig::from_file(&path).unwrap();
    assert_eq!(config.tokenizer.stop_words, StopWords::English);
    assert_eq!(config.tokenizer.min_token_len, 3);
    assert!(config.tokenizer.lowercase);
    assert!(config.weighting.sublinear_tf);
    assert!(config.weighting.smooth_idf);

    // "go" is below the length floor, "the" is a stop word
    let scores = Ranker::new(config).rank("the go", &["the go"]);
    assert_eq!(scores, vec![0.0]);
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RankConfig::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}
