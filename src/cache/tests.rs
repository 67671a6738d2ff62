//! Tests for reading and writing the comment cache.

use std::collections::BTreeSet;
use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

use super::{CacheError, read_snapshot, write_snapshot};
use crate::github::{PullRequest, ReviewComment};
use crate::source::ReviewSnapshot;

struct CacheDir {
    _dir: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn cache_dir() -> CacheDir {
    let dir = TempDir::new().expect("temp dir should be created");
    let root = Utf8Path::from_path(dir.path()).expect("temp dir should be UTF-8");
    let path = root.join("student_comments.json");
    CacheDir { _dir: dir, path }
}

fn sample_snapshot() -> ReviewSnapshot {
    ReviewSnapshot {
        pull_requests: vec![
            PullRequest {
                number: 50,
                title: "Add ops chapter".to_owned(),
                labels: BTreeSet::from(["cs249r".to_owned()]),
            },
            PullRequest {
                number: 42,
                title: "Add benchmarking chapter".to_owned(),
                labels: BTreeSet::from(["cs249r".to_owned()]),
            },
        ],
        comments: vec![ReviewComment {
            author_login: "alice".to_owned(),
            body: "hello world".to_owned(),
            pr_number: 42,
            pr_title: "Add benchmarking chapter".to_owned(),
            avatar_url: "https://avatars.example/alice".to_owned(),
        }],
    }
}

#[rstest]
fn missing_file_reads_as_none(cache_dir: CacheDir) {
    let result = read_snapshot(&cache_dir.path).expect("missing cache is not an error");

    assert!(result.is_none());
}

#[rstest]
fn written_cache_uses_flat_record_fields(cache_dir: CacheDir) {
    write_snapshot(&cache_dir.path, &sample_snapshot()).expect("cache should be written");

    let raw = fs::read_to_string(&cache_dir.path).expect("cache should be readable");
    let parsed: Value = serde_json::from_str(&raw).expect("cache should be JSON");

    assert_eq!(
        parsed.get("records"),
        Some(&json!([{
            "user": "alice",
            "comment": "hello world",
            "pr_title": "Add benchmarking chapter",
            "pr_number": 42,
            "profile_picture": "https://avatars.example/alice"
        }]))
    );
    let numbers: Vec<u64> = parsed
        .get("pull_requests")
        .and_then(Value::as_array)
        .expect("pull_requests array")
        .iter()
        .filter_map(|pr| pr.get("number").and_then(Value::as_u64))
        .collect();
    assert_eq!(numbers, vec![50, 42], "pull request order should be kept");
}

#[rstest]
fn written_cache_reads_back_unchanged(cache_dir: CacheDir) {
    let snapshot = sample_snapshot();
    write_snapshot(&cache_dir.path, &snapshot).expect("cache should be written");

    let restored = read_snapshot(&cache_dir.path)
        .expect("cache should parse")
        .expect("cache should exist");

    assert_eq!(restored, snapshot);
}

#[rstest]
fn legacy_record_array_rebuilds_pull_requests(cache_dir: CacheDir) {
    let legacy = json!([
        { "user": "bob", "comment": "nice", "pr_title": "Ops", "pr_number": 50, "profile_picture": "b.png" },
        { "user": "alice", "comment": "hello world", "pr_title": "Bench", "pr_number": 42, "profile_picture": "a.png" },
        { "user": "alice", "comment": "good work", "pr_title": "Bench", "pr_number": 42, "profile_picture": "a.png" }
    ]);
    fs::write(&cache_dir.path, legacy.to_string()).expect("legacy cache should be written");

    let snapshot = read_snapshot(&cache_dir.path)
        .expect("legacy cache should parse")
        .expect("cache should exist");

    let numbers: Vec<u64> = snapshot.pull_requests.iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, vec![50, 42], "distinct PRs in record order");
    let bench = snapshot.pull_requests.get(1).expect("second PR");
    assert_eq!(bench.title, "Bench");
    assert_eq!(snapshot.comments.len(), 3);
    let last = snapshot.comments.last().expect("last comment");
    assert_eq!(last.author_login, "alice");
    assert_eq!(last.body, "good work");
    assert_eq!(last.avatar_url, "a.png");
}

#[rstest]
fn empty_legacy_array_is_an_empty_snapshot(cache_dir: CacheDir) {
    fs::write(&cache_dir.path, "[]").expect("cache should be written");

    let snapshot = read_snapshot(&cache_dir.path)
        .expect("empty cache should parse")
        .expect("cache should exist");

    assert_eq!(snapshot, ReviewSnapshot::default());
}

#[rstest]
#[case::not_json("this is not json")]
#[case::wrong_shape(r#"{"records": "nope"}"#)]
#[case::missing_field(r#"[{"user": "alice"}]"#)]
fn malformed_cache_is_a_parse_error(cache_dir: CacheDir, #[case] contents: &str) {
    fs::write(&cache_dir.path, contents).expect("cache should be written");

    let error = read_snapshot(&cache_dir.path).expect_err("malformed cache should fail");

    match error {
        CacheError::Parse { path, .. } => assert_eq!(path, cache_dir.path.as_str()),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[rstest]
fn unwritable_location_is_a_write_error(cache_dir: CacheDir) {
    let target = cache_dir.path.join("nested").join("cache.json");

    let error = write_snapshot(&target, &sample_snapshot()).expect_err("write should fail");

    assert!(matches!(error, CacheError::Write { .. }), "got {error:?}");
}
