//! Common test utilities for integration tests.
//!
//! Fixtures for the four API endpoints and helpers to mount them on a
//! `wiremock` server.

#![allow(dead_code)]

use actpulse::client::ActsClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Address nothing listens on, for connection-refused tests.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:59999";

/// Client pointed at a running mock server.
pub fn client_for(server: &MockServer) -> ActsClient {
    ActsClient::with_base_url(server.uri())
}

/// `/fetch` body for an act with the given comments, in order.
pub fn act_details_json(act: &str, overall: &str, comments: &[(&str, &str)]) -> Value {
    let comments: serde_json::Map<String, Value> = comments
        .iter()
        .map(|(comment, sentiment)| (comment.to_string(), Value::from(*sentiment)))
        .collect();
    json!({
        "act": act,
        "overall_sentiment": overall,
        "summary": format!("Summary of {}.", act),
        "word_list": ["privacy", "consent", "data"],
        "comments": comments,
    })
}

pub async fn mount_acts(server: &MockServer, acts: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/acts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(acts)))
        .mount(server)
        .await;
}

/// Mount `/fetch` for one act, matched on the decoded `act` parameter.
pub async fn mount_act_details(server: &MockServer, act: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/fetch"))
        .and(query_param("act", act))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_health(server: &MockServer, api: &str, database: &str) {
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"api": api, "database": database})),
        )
        .mount(server)
        .await;
}
