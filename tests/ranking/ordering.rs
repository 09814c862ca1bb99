//! Sorted results, ranks and the JSON request path.

use super::common::{backend_resumes, BACKEND_JOB};
use talentvector::{RankRequest, Ranker};

#[test]
fn backend_resume_ranks_first() {
    let ranked = Ranker::default().rank_candidates(BACKEND_JOB, &backend_resumes());
    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["rust_backend.txt", "frontend.txt", "pastry_chef.txt"]);
}

#[test]
fn ranks_are_one_based_and_scores_non_increasing() {
    let ranked = Ranker::default().rank_candidates(BACKEND_JOB, &backend_resumes());
    for (i, entry) in ranked.iter().enumerate() {
        assert_eq!(entry.rank, i + 1);
    }
    for pair in ranked.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "{} ({}) ranked above {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
}

#[test]
fn rank_top_with_generous_limit_keeps_everyone() {
    let resumes = backend_resumes();
    let top = Ranker::default().rank_top(BACKEND_JOB, &resumes, 100);
    assert_eq!(top.len(), resumes.len());

    let none = Ranker::default().rank_top(BACKEND_JOB, &resumes, 0);
    assert!(none.is_empty());
}

#[test]
fn json_request_round_trip() {
    let json = r#"{
        "query": "Backend engineer: Rust, PostgreSQL, Kubernetes.",
        "jobTitle": "Backend Engineer",
        "candidates": [
            "Pastry chef. Croissants and sourdough.",
            {"id": "alice", "text": "Rust backend engineer, PostgreSQL and Kubernetes."}
        ],
        "limit": 1
    }"#;
    let request: RankRequest = serde_json::from_str(json).unwrap();
    let response = Ranker::default().respond(request).unwrap();

    assert_eq!(response.scores.len(), 2);
    assert_eq!(response.scores[0], 0.0);
    assert!(response.scores[1] > 0.5);
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].id, "alice");
    assert_eq!(response.results[0].rank, 1);

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["jobTitle"], "Backend Engineer");
    assert_eq!(value["results"][0]["id"], "alice");
}

#[test]
fn bare_text_candidates_are_named_by_position() {
    let request: RankRequest =
        serde_json::from_str(r#"{"query": "rust", "candidates": ["go", "rust"]}"#).unwrap();
    let response = Ranker::default().respond(request).unwrap();
    assert_eq!(response.results[0].id, "1");
    assert_eq!(response.results[1].id, "0");
}

#[test]
fn document_request_matches_rank_top() {
    use talentvector::CandidateInput;

    let resumes = backend_resumes();
    let ranker = Ranker::default();
    let request = RankRequest {
        query: BACKEND_JOB.to_string(),
        candidates: resumes.iter().cloned().map(CandidateInput::Document).collect(),
        job_title: Some("Backend".to_string()),
        config: None,
        limit: Some(2),
    };

    let response = ranker.respond(request).unwrap();
    assert_eq!(response.results, ranker.rank_top(BACKEND_JOB, &resumes, 2));
    assert_eq!(response.scores.len(), resumes.len());
}
