//! Builders for GitHub API payloads shared by unit and integration tests.

use serde_json::{Value, json};

/// Builds a `GET /pulls` list item carrying the given labels.
#[must_use]
pub fn pull_request_json(number: u64, title: &str, labels: &[&str]) -> Value {
    let label_objects: Vec<Value> = labels.iter().map(|name| json!({ "name": name })).collect();
    json!({
        "number": number,
        "title": title,
        "state": "open",
        "labels": label_objects,
        "user": { "login": "octocat" }
    })
}

/// Builds a `GET /pulls/{number}/comments` list item.
#[must_use]
pub fn review_comment_json(login: &str, body: &str) -> Value {
    json!({
        "id": 1,
        "body": body,
        "path": "contents/chapter.qmd",
        "line": 12,
        "diff_hunk": "@@ -10,3 +10,4 @@",
        "user": {
            "login": login,
            "avatar_url": format!("https://avatars.example/{login}")
        }
    })
}
