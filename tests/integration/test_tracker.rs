use crate::common;
use cf_tracker::{standings::Participation, stats::Period};
use serde_json::json;
use std::time::{SystemTime, UNIX_EPOCH};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}

#[tokio::test]
async fn a_handle_is_fetched_at_most_once_per_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .and(query_param("handle", "alice"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::ok(json!([common::submission(now(), "OK", 1, "A")]))),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::user("alice", Some("ENSI"), Some(1543), Some("Tunisia"))
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = common::tracker_for(&server);
    let first = tracker.user_stats("alice", Period::All).await;
    let second = tracker.user_stats("alice", Period::All).await;
    assert_eq!(first.solved, 1);
    assert_eq!(second.solved, 1);
    assert_eq!(second.organization.as_deref(), Some("ENSI"));
}

#[tokio::test]
async fn failed_handles_stay_in_the_ranking_with_placeholders() {
    let server = MockServer::start().await;
    let recent = now() - 3600;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .and(query_param("handle", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::submission(recent, "OK", 1, "A"),
            common::submission(recent + 60, "OK", 1, "A"),
            common::submission(recent + 120, "OK", 1, "B"),
            common::submission(recent + 180, "WRONG_ANSWER", 1, "C"),
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "alice"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::user("alice", Some("ENSI"), Some(1543), Some("Tunisia"))
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.status"))
        .and(query_param("handle", "bob"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "bob"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let tracker = common::tracker_for(&server);
    let handles = vec!["alice".to_string(), "bob".to_string()];
    let mut progress = Vec::new();
    let board = tracker
        .collect(&handles, Period::Last30Days, |board| {
            progress.push(board.progress())
        })
        .await;

    let entries = board.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].handle, "alice");
    assert_eq!(entries[0].solved, 2);
    assert_eq!(entries[1].handle, "bob");
    assert_eq!(entries[1].solved, 0);
    assert!(entries[1].organization.is_none());
    assert!(entries[1].rating.is_none());
    assert_eq!(progress.last(), Some(&100));
}

#[tokio::test]
async fn standings_keep_roster_members_and_mark_unofficial_rows() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contest.standings"))
        .and(query_param("contestId", "1234"))
        .and(query_param("showUnofficial", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!({
            "rows": [
                {
                    "party": { "members": [{ "handle": "stranger" }], "participantType": "CONTESTANT" },
                    "rank": 1,
                    "points": 3000.0
                },
                {
                    "party": { "members": [{ "handle": "alice" }], "participantType": "CONTESTANT" },
                    "rank": 4,
                    "points": 1520.5
                },
                {
                    "party": { "members": [{ "handle": "bob" }], "participantType": "VIRTUAL" },
                    "rank": 9,
                    "points": 800.0
                }
            ]
        }))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "alice;bob"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::user("alice", Some("ENSI"), Some(1543), Some("Tunisia")),
            common::user("bob", Some("INSAT"), Some(2105), Some("Tunisia"))
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = common::tracker_for(&server);
    let handles = vec!["alice".to_string(), "bob".to_string()];
    let view = tracker
        .standings(&handles, 1234, None, Participation::All)
        .await;

    assert_eq!(view.rows.len(), 2);
    assert_eq!(view.rows[0].handle, "alice");
    assert_eq!(view.rows[0].official_rank, Some(4));
    assert_eq!(view.rows[1].handle, "bob");
    assert_eq!(view.rows[1].official_rank, None);
    assert!(view.organizations.contains("ENSI"));
    assert!(view.organizations.contains("INSAT"));
}

#[tokio::test]
async fn a_failed_standings_fetch_degrades_to_an_empty_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/contest.standings"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&server)
        .await;

    let tracker = common::tracker_for(&server);
    let handles = vec!["alice".to_string()];
    let view = tracker
        .standings(&handles, 1, None, Participation::All)
        .await;
    assert!(view.rows.is_empty());
    assert!(view.organizations.is_empty());
}
