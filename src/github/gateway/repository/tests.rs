//! Tests for the repository gateway.

use std::collections::BTreeSet;

use rstest::{fixture, rstest};
use serde_json::json;
use tokio::runtime::Runtime;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::OctocrabRepositoryGateway;
use crate::github::error::IntakeError;
use crate::github::gateway::RepositoryGateway;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator};
use crate::github::models::PullRequest;
use crate::test_support::{pull_request_json, review_comment_json};

const PULLS_PATH: &str = "/api/v3/repos/owner/repo/pulls";
const COMMENTS_PATH: &str = "/api/v3/repos/owner/repo/pulls/42/comments";
const BEARER: &str = "Bearer valid-token";

struct RepositoryGatewayFixture {
    runtime: Runtime,
    server: MockServer,
    locator: RepositoryLocator,
    gateway: OctocrabRepositoryGateway,
}

impl RepositoryGatewayFixture {
    fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    fn mount(&self, mock: Mock) {
        self.block_on(mock.mount(&self.server));
    }
}

#[fixture]
fn token() -> PersonalAccessToken {
    PersonalAccessToken::new("valid-token").expect("token should be valid")
}

#[fixture]
fn gateway_fixture(token: PersonalAccessToken) -> RepositoryGatewayFixture {
    let runtime = Runtime::new().expect("runtime should start");
    let server = runtime.block_on(MockServer::start());
    let locator = RepositoryLocator::new(&format!("{}/api/v3", server.uri()), "owner", "repo")
        .expect("should create repository locator");
    let gateway = {
        let _guard = runtime.enter();
        OctocrabRepositoryGateway::for_token(&token, &locator).expect("should create gateway")
    };
    RepositoryGatewayFixture {
        runtime,
        server,
        locator,
        gateway,
    }
}

fn pull_request_42() -> PullRequest {
    PullRequest {
        number: 42,
        title: "Add benchmarking chapter".to_owned(),
        labels: BTreeSet::from(["cs249r".to_owned()]),
    }
}

#[rstest]
fn list_pull_requests_page_requests_all_states(gateway_fixture: RepositoryGatewayFixture) {
    let fixture = gateway_fixture;
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(PULLS_PATH))
            .and(header("authorization", BEARER))
            .and(query_param("state", "all"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                pull_request_json(50, "Add ops chapter", &["cs249r"]),
                pull_request_json(42, "Add benchmarking chapter", &["cs249r", "docs"]),
            ]))),
    );

    let pulls = fixture
        .block_on(fixture.gateway.list_pull_requests_page(&fixture.locator, 1))
        .expect("request should succeed");

    let numbers: Vec<u64> = pulls.iter().map(|pr| pr.number).collect();
    assert_eq!(numbers, vec![50, 42], "endpoint order should be preserved");
    let second = pulls.get(1).expect("second pull request");
    assert_eq!(second.title, "Add benchmarking chapter");
    assert!(second.has_label("docs"));
}

#[rstest]
fn list_pull_requests_page_forwards_page_number(gateway_fixture: RepositoryGatewayFixture) {
    let fixture = gateway_fixture;
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(PULLS_PATH))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1),
    );

    let pulls = fixture
        .block_on(fixture.gateway.list_pull_requests_page(&fixture.locator, 3))
        .expect("request should succeed");

    assert!(pulls.is_empty(), "empty page should map to no pull requests");
}

#[rstest]
fn list_review_comments_page_tags_comments_with_pull_request(
    gateway_fixture: RepositoryGatewayFixture,
) {
    let fixture = gateway_fixture;
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .and(header("authorization", BEARER))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                review_comment_json("alice", "hello world"),
                review_comment_json("profvjreddi", "ignore me"),
            ]))),
    );

    let comments = fixture
        .block_on(fixture.gateway.list_review_comments_page(
            &fixture.locator,
            &pull_request_42(),
            1,
        ))
        .expect("request should succeed");

    assert_eq!(comments.len(), 2, "gateway should not filter comments");
    let first = comments.first().expect("first comment");
    assert_eq!(first.author_login, "alice");
    assert_eq!(first.body, "hello world");
    assert_eq!(first.pr_number, 42);
    assert_eq!(first.pr_title, "Add benchmarking chapter");
    assert_eq!(first.avatar_url, "https://avatars.example/alice");
}

#[rstest]
fn list_review_comments_page_maps_auth_errors(gateway_fixture: RepositoryGatewayFixture) {
    let fixture = gateway_fixture;
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "message": "Bad credentials",
                "documentation_url": "https://docs.github.com/rest"
            }))),
    );

    let error = fixture
        .block_on(fixture.gateway.list_review_comments_page(
            &fixture.locator,
            &pull_request_42(),
            1,
        ))
        .expect_err("request should fail");

    match error {
        IntakeError::Authentication { message } => {
            assert!(
                message.contains("Bad credentials"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected Authentication error, got {other:?}"),
    }
}

#[rstest]
fn list_pull_requests_page_maps_not_found_to_api_error(
    gateway_fixture: RepositoryGatewayFixture,
) {
    let fixture = gateway_fixture;
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(PULLS_PATH))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "message": "Not Found",
                "documentation_url": "https://docs.github.com/rest"
            }))),
    );

    let error = fixture
        .block_on(fixture.gateway.list_pull_requests_page(&fixture.locator, 1))
        .expect_err("request should fail");

    match error {
        IntakeError::Api { message } => {
            assert!(message.contains("list pulls"), "unexpected message: {message}");
            assert!(message.contains("Not Found"), "unexpected message: {message}");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[rstest]
fn requests_carry_the_token_as_bearer_credentials(gateway_fixture: RepositoryGatewayFixture) {
    let fixture = gateway_fixture;
    // Only an authorised request gets a page; anything else falls through to
    // wiremock's default 404.
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(PULLS_PATH))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                pull_request_json(42, "Add benchmarking chapter", &["cs249r"]),
            ])))
            .expect(1),
    );
    fixture.mount(
        Mock::given(method("GET"))
            .and(path(COMMENTS_PATH))
            .and(header("authorization", BEARER))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1),
    );

    let pulls = fixture
        .block_on(fixture.gateway.list_pull_requests_page(&fixture.locator, 1))
        .expect("authorised pull listing should succeed");
    let comments = fixture
        .block_on(fixture.gateway.list_review_comments_page(
            &fixture.locator,
            &pull_request_42(),
            1,
        ))
        .expect("authorised comment listing should succeed");

    assert_eq!(pulls.len(), 1);
    assert!(comments.is_empty());
}
