use crate::common;
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn rate_limited_requests_wait_out_the_hint_and_succeed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::ok(json!([common::user("alice", None, None, None)]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = common::session_for(&server);
    let start = Instant::now();
    let users = session.user_info(&["alice".to_string()]).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].handle, "alice");
    // two 429s with a one second hint each
    assert!(start.elapsed() >= Duration::from_secs(2));
}

#[tokio::test]
async fn client_errors_fail_immediately_without_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let session = common::session_for(&server);
    let result = session.user_status("missing").await;
    assert!(result.unwrap_err().is_client_error());
}

#[tokio::test]
async fn server_errors_are_retried_until_the_budget_runs_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .respond_with(ResponseTemplate::new(500))
        .expect(4)
        .mount(&server)
        .await;

    let session = common::session_for(&server);
    let result = session.user_status("alice").await;
    assert!(!result.unwrap_err().is_client_error());
}

#[tokio::test]
async fn a_transient_error_recovers_on_a_later_attempt() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .respond_with(ResponseTemplate::new(500))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([]))))
        .expect(1)
        .mount(&server)
        .await;

    let session = common::session_for(&server);
    let submissions = session.user_status("alice").await.unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn malformed_bodies_count_as_transient() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("surprise"))
        .expect(4)
        .mount(&server)
        .await;

    let session = common::session_for(&server);
    assert!(session.user_status("alice").await.is_err());
}

#[tokio::test]
async fn a_non_ok_envelope_is_a_failed_result_not_a_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contest.standings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "FAILED",
            "comment": "contestId: Contest with id 999999 not found"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = common::session_for(&server);
    assert!(session.contest_standings(999999, true).await.is_err());
}
