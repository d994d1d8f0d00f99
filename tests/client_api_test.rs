//! API client endpoint tests using wiremock.
//!
//! These tests verify that ActsClient calls `/acts`, `/fetch`, `/add` and
//! `/health` correctly and classifies every failure into one of the three
//! error kinds.

mod common;

use actpulse::client::ActsClient;
use actpulse::error::{ApiError, ApiErrorKind};
use actpulse::models::Comment;
use common::{act_details_json, client_for, mount_act_details, mount_acts, UNREACHABLE_URL};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_acts_preserves_server_order() {
    let mock_server = MockServer::start().await;
    mount_acts(&mock_server, &["Zeta Act", "Alpha Act", "Zeta Act"]).await;

    let client = client_for(&mock_server);
    let acts = client.list_acts().await.unwrap();

    // No sorting, no dedup
    assert_eq!(acts, vec!["Zeta Act", "Alpha Act", "Zeta Act"]);
}

#[tokio::test]
async fn test_list_acts_empty() {
    let mock_server = MockServer::start().await;
    mount_acts(&mock_server, &[]).await;

    let acts = client_for(&mock_server).list_acts().await.unwrap();
    assert!(acts.is_empty());
}

#[tokio::test]
async fn test_fetch_act_details_round_trips_reserved_characters() {
    let mock_server = MockServer::start().await;
    let act = "Privacy & Data Act 2024";
    mount_act_details(
        &mock_server,
        act,
        act_details_json(act, "Mixed", &[("Too broad", "Negative")]),
    )
    .await;

    let details = client_for(&mock_server)
        .fetch_act_details(act)
        .await
        .unwrap();

    assert_eq!(details.act, act);
    assert_eq!(details.overall_sentiment, "Mixed");
    assert_eq!(details.comments.len(), 1);
    assert_eq!(details.comments[0].comment, "Too broad");
}

#[tokio::test]
async fn test_fetch_act_details_non_ascii_and_percent() {
    let mock_server = MockServer::start().await;
    let act = "Loi #3 sur la Santé 100%";
    mount_act_details(&mock_server, act, act_details_json(act, "Positive", &[])).await;

    let details = client_for(&mock_server)
        .fetch_act_details(act)
        .await
        .unwrap();
    assert_eq!(details.act, act);
    assert!(details.comments.is_empty());
}

#[tokio::test]
async fn test_fetch_unknown_act_is_server_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetch"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Act not found"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_act_details("No Such Act")
        .await
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::Server {
            status: 404,
            message: "Act not found".to_string()
        }
    );
}

#[tokio::test]
async fn test_submit_comment_sends_only_comment_and_act() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "comment": "Great for privacy.",
            "act": "Privacy Act"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "comment": "Great for privacy.",
            "act": "Privacy Act",
            "sentiment": "Positive"
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let mut comment = Comment::new("Privacy Act", "Great for privacy.");
    // A sentiment on the request must not reach the wire
    comment.sentiment = Some("Negative".to_string());

    let responses = client.submit_comment(&comment).await.unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].sentiment, "Positive");
    assert_eq!(responses[0].act, "Privacy Act");
}

#[tokio::test]
async fn test_submit_comment_empty_list() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    let responses = client_for(&mock_server)
        .submit_comment(&Comment::new("Act A", "ok"))
        .await
        .unwrap();
    assert!(responses.is_empty());
}

#[tokio::test]
async fn test_submit_comment_server_error_keeps_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/add"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{\"detail\": \"db down\"}"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .submit_comment(&Comment::new("Act A", "ok"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ApiErrorKind::Server);
    assert_eq!(err.status(), Some(500));
    // Body stays opaque, never parsed
    assert_eq!(
        err,
        ApiError::Server {
            status: 500,
            message: "{\"detail\": \"db down\"}".to_string()
        }
    );
}

#[tokio::test]
async fn test_fetch_health() {
    let mock_server = MockServer::start().await;
    common::mount_health(&mock_server, "up", "healthy").await;

    let status = client_for(&mock_server).fetch_health().await.unwrap();
    assert!(status.is_healthy());
}

#[tokio::test]
async fn test_connection_refused_is_network_error_on_every_operation() {
    let client = ActsClient::with_base_url(UNREACHABLE_URL);

    let errors = vec![
        client.list_acts().await.unwrap_err(),
        client.fetch_act_details("Act A").await.unwrap_err(),
        client
            .submit_comment(&Comment::new("Act A", "hello"))
            .await
            .unwrap_err(),
        client.fetch_health().await.unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.kind(), ApiErrorKind::Network, "got {:?}", err);
    }
}

#[tokio::test]
async fn test_invalid_json_is_decode_error_and_isolated() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/acts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;
    common::mount_health(&mock_server, "up", "healthy").await;

    let client = client_for(&mock_server);
    let (acts, health) = tokio::join!(client.list_acts(), client.fetch_health());

    assert_eq!(acts.unwrap_err().kind(), ApiErrorKind::Decode);
    assert!(health.unwrap().is_healthy());
}

#[tokio::test]
async fn test_wrong_shape_is_decode_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!(["up"])))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).fetch_health().await.unwrap_err();
    assert_eq!(err.kind(), ApiErrorKind::Decode);
}

#[tokio::test]
async fn test_concurrent_fetches_are_independent() {
    let mock_server = MockServer::start().await;
    mount_act_details(
        &mock_server,
        "Act A",
        act_details_json("Act A", "Positive", &[("yes", "Positive")]),
    )
    .await;
    mount_act_details(
        &mock_server,
        "Act B",
        act_details_json("Act B", "Negative", &[("no", "Negative"), ("never", "Negative")]),
    )
    .await;

    let client = client_for(&mock_server);
    let (a, b) = tokio::join!(
        client.fetch_act_details("Act A"),
        client.fetch_act_details("Act B")
    );

    let a = a.unwrap();
    let b = b.unwrap();
    assert_eq!(a.act, "Act A");
    assert_eq!(a.comments.len(), 1);
    assert_eq!(b.act, "Act B");
    assert_eq!(b.overall_sentiment, "Negative");
    assert_eq!(b.comments.len(), 2);
}

#[tokio::test]
async fn test_query_param_matches_decoded_act() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/fetch"))
        .and(query_param("act", "A+B = C?"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(act_details_json("A+B = C?", "Neutral", &[])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let details = client_for(&mock_server)
        .fetch_act_details("A+B = C?")
        .await
        .unwrap();
    assert_eq!(details.act, "A+B = C?");
}
