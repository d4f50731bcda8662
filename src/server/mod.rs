//! Webhook server
//!
//! A single axum route receives everything Slack sends: endpoint
//! verification, slash commands and Events API callbacks. The handler
//! acknowledges immediately and runs the actual work in a spawned task, per
//! Slack's fast-acknowledgment requirement.

use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use crate::catalog::CatalogClient;
use crate::slack::SlackClient;

pub mod handlers;

/// Shared per-process state handed to each invocation.
pub struct AppState {
    pub slack: SlackClient,
    pub catalog: CatalogClient,
}

impl AppState {
    pub fn new(slack: SlackClient, catalog: CatalogClient) -> Self {
        Self { slack, catalog }
    }
}

/// Build the webhook router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/slack/events", post(handlers::slack_events))
        .with_state(Arc::new(state))
}
