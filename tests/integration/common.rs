use cf_tracker::{
    api::{RetryPolicy, Session},
    cache::Cache,
    schedule::Scheduler,
    tracker::Tracker,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;

pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        retries: 3,
        backoff: Duration::from_millis(10),
        rate_limit_wait: Duration::from_millis(50),
    }
}

pub fn session_for(server: &MockServer) -> Session {
    Session::with_base(server.uri()).with_policy(fast_policy())
}

pub fn tracker_for(server: &MockServer) -> Tracker {
    Tracker::new(
        session_for(server),
        Scheduler::new(3, Duration::from_millis(10)),
        Cache::new(),
    )
}

pub fn ok(result: Value) -> Value {
    json!({ "status": "OK", "result": result })
}

pub fn submission(seconds: u64, verdict: &str, contest: u64, index: &str) -> Value {
    json!({
        "creationTimeSeconds": seconds,
        "problem": { "contestId": contest, "index": index },
        "verdict": verdict
    })
}

pub fn user(
    handle: &str,
    organization: Option<&str>,
    rating: Option<i64>,
    country: Option<&str>,
) -> Value {
    json!({
        "handle": handle,
        "organization": organization,
        "rating": rating,
        "country": country
    })
}
