use crate::common;
use cf_tracker::roster::{AddStatus, Roster};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn verify_and_add_distinguishes_every_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "amine"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::user("amine", Some("ENSI"), Some(1700), Some("Tunisia"))
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "tourist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::user("tourist", None, Some(3700), Some("Belarus"))
        ]))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "ghost"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let api = common::session_for(&server);
    let mut roster = Roster::new(Some("Tunisia".to_string()));

    assert_eq!(roster.verify_and_add(&api, "amine").await, AddStatus::Added);
    assert_eq!(roster.verify_and_add(&api, "amine").await, AddStatus::Exists);
    assert_eq!(
        roster.verify_and_add(&api, "tourist").await,
        AddStatus::NotInCommunity
    );
    assert_eq!(roster.verify_and_add(&api, "ghost").await, AddStatus::Invalid);
    assert_eq!(roster.handles(), ["amine"]);
}

#[tokio::test]
async fn rosters_without_a_country_accept_any_valid_handle() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user.info"))
        .and(query_param("handles", "tourist"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::ok(json!([
            common::user("tourist", None, Some(3700), Some("Belarus"))
        ]))))
        .mount(&server)
        .await;

    let api = common::session_for(&server);
    let mut roster = Roster::new(None);
    assert_eq!(roster.verify_and_add(&api, "tourist").await, AddStatus::Added);
}
