//! Webhook endpoint integration tests
//!
//! Drives the axum router directly via tower's oneshot and mocks the catalog
//! and Slack APIs with wiremock.

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use datenbot::catalog::CatalogClient;
use datenbot::server::{create_app, AppState};
use datenbot::slack::SlackClient;

/// State wired to unroutable endpoints; good enough for requests that never
/// reach an external API.
fn offline_state() -> AppState {
    AppState::new(
        SlackClient::with_base_url("xoxb-test".to_string(), "http://127.0.0.1:1".to_string()),
        CatalogClient::with_url("http://127.0.0.1:1".to_string()),
    )
}

fn post_events(content_type: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/slack/events")
        .header(header::CONTENT_TYPE, content_type)
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn url_verification_echoes_the_challenge() {
    let app = create_app(offline_state());

    let body = r#"{"type":"url_verification","challenge":"c4ll3ng3"}"#;
    let response = app
        .oneshot(post_events("application/json", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"c4ll3ng3");
}

#[tokio::test]
async fn malformed_body_is_acknowledged_with_empty_200() {
    let app = create_app(offline_state());

    let response = app
        .oneshot(post_events("application/json", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

#[tokio::test]
async fn unknown_event_is_acknowledged_with_empty_200() {
    let app = create_app(offline_state());

    let body = r#"{"type":"event_callback","event":{"type":"reaction_added"}}"#;
    let response = app
        .oneshot(post_events("application/json", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn slash_command_acks_immediately_and_posts_the_summary() {
    let catalog = MockServer::start().await;
    let slack = MockServer::start().await;

    // One record released today, so it qualifies for any positive window.
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "result": {
                "results": [{
                    "title": "Parks",
                    "author": "Amt X",
                    "date_released": today,
                }]
            }
        })))
        .mount(&catalog)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({"channel": "C123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&slack)
        .await;

    let state = AppState::new(
        SlackClient::with_base_url("xoxb-test".to_string(), slack.uri()),
        CatalogClient::with_url(catalog.uri()),
    );
    let app = create_app(state);

    let body = "command=%2Fopendata&text=14&channel_id=C123";
    let response = app
        .oneshot(post_events("application/x-www-form-urlencoded", body))
        .await
        .unwrap();

    // The ack is empty and does not wait for the pipeline.
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    // Wait for the spawned invocation to hit the Slack mock.
    for _ in 0..100 {
        if !slack.received_requests().await.unwrap_or_default().is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }

    let requests = slack.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let posted: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let text = posted["text"].as_str().unwrap();
    assert!(text.contains("*Neue offene Datensätze!* :star:"));
    assert!(text.contains("In den letzten 14 Tagen"));
    assert!(text.contains("<https://daten.berlin.de/search/node/Parks|Parks>"));
}

#[tokio::test]
async fn channel_message_gets_reaction_and_threaded_greeting() {
    let slack = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reactions.add"))
        .and(body_partial_json(json!({
            "channel": "C9",
            "name": "robot_face",
            "timestamp": "1700000000.000100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&slack)
        .await;

    Mock::given(method("POST"))
        .and(path("/chat.postMessage"))
        .and(body_partial_json(json!({
            "channel": "C9",
            "text": "Hello :wave:",
            "thread_ts": "1700000000.000100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&slack)
        .await;

    let state = AppState::new(
        SlackClient::with_base_url("xoxb-test".to_string(), slack.uri()),
        CatalogClient::with_url("http://127.0.0.1:1".to_string()),
    );
    let app = create_app(state);

    let body = json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel": "C9",
            "ts": "1700000000.000100",
            "text": "hi bot"
        }
    })
    .to_string();

    let response = app
        .oneshot(post_events("application/json", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    for _ in 0..100 {
        if slack.received_requests().await.unwrap_or_default().len() >= 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert_eq!(slack.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn bot_messages_are_ignored() {
    let slack = MockServer::start().await;

    let state = AppState::new(
        SlackClient::with_base_url("xoxb-test".to_string(), slack.uri()),
        CatalogClient::with_url("http://127.0.0.1:1".to_string()),
    );
    let app = create_app(state);

    let body = json!({
        "type": "event_callback",
        "event": {
            "type": "message",
            "channel": "C9",
            "ts": "1700000000.000200",
            "bot_id": "B1",
            "text": "Hello :wave:"
        }
    })
    .to_string();

    let response = app
        .oneshot(post_events("application/json", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(slack.received_requests().await.unwrap_or_default().is_empty());
}
