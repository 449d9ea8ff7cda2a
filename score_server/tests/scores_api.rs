mod support;

use serde_json::{Value, json};

async fn post_score(body: Value) -> reqwest::Response {
    let base_url = support::ensure_server();
    reqwest::Client::new()
        .post(format!("{base_url}/scores"))
        .json(&body)
        .send()
        .await
        .expect("request should succeed")
}

fn scores_of(table: &[Value]) -> Vec<u64> {
    table
        .iter()
        .map(|row| row["score"].as_u64().expect("score is an integer"))
        .collect()
}

#[tokio::test]
async fn test_submission_is_sanitized_and_persisted() {
    let res = post_score(json!({"name": "q7z!x", "score": 4_000_000_001.9, "round": 6})).await;

    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let table: Vec<Value> = res.json().await.expect("json table");
    assert!(
        table
            .iter()
            .any(|row| row == &json!({"initials": "QZX", "score": 4_000_000_001u64, "round": 6}))
    );

    let on_disk: Vec<Value> = serde_json::from_str(
        &std::fs::read_to_string(support::scores_file()).expect("score file written"),
    )
    .expect("score file is json");
    assert!(on_disk.iter().any(|row| row["initials"] == "QZX"));
}

#[tokio::test]
async fn test_table_stays_ranked_and_capped() {
    for score in [4_100_000_000u64, 4_100_000_001, 4_100_000_002] {
        let res = post_score(json!({"name": "cap", "score": score})).await;
        assert_eq!(res.status(), reqwest::StatusCode::OK);
    }

    let base_url = support::ensure_server();
    let table: Vec<Value> = reqwest::get(format!("{base_url}/scores"))
        .await
        .expect("request should succeed")
        .json()
        .await
        .expect("json table");

    assert!(table.len() <= 10);
    let scores = scores_of(&table);
    let mut ranked = scores.clone();
    ranked.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(scores, ranked);
}

#[tokio::test]
async fn test_invalid_submissions_are_rejected() {
    let res = post_score(json!({"score": 10})).await;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.expect("json error");
    assert_eq!(body["message"], "name is required");

    let res = post_score(json!({"name": "abc", "score": "ten"})).await;
    assert_eq!(res.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.expect("json error");
    assert_eq!(body["message"], "score must be numeric");
}
