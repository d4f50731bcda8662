//! Webhook request handling and invocation pipelines
//!
//! Every inbound request is answered with HTTP 200: a challenge echo for
//! endpoint verification, an empty body for everything else. Failures inside
//! an invocation are logged and never reach the user; the only user-visible
//! failure mode is the bot not replying.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::{error, info, warn};

use crate::catalog::select_recent;
use crate::slack::{classify, parse_request_body, parse_window_days, InboundEvent};
use crate::summary::render_summary;

use super::AppState;

/// The slash command that triggers a catalog summary.
const OPENDATA_COMMAND: &str = "/opendata";

/// Entry point for `POST /slack/events`.
pub async fn slack_events(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());

    let Some(payload) = parse_request_body(&body, content_type) else {
        warn!("Dropping webhook request with unparseable body");
        return StatusCode::OK.into_response();
    };

    match classify(&payload) {
        InboundEvent::UrlVerification { challenge } => {
            info!("Answering endpoint verification challenge");
            (StatusCode::OK, challenge).into_response()
        }
        InboundEvent::SlashCommand {
            command,
            text,
            channel_id,
        } => {
            if command == OPENDATA_COMMAND && !channel_id.is_empty() {
                tokio::spawn(async move {
                    run_opendata_invocation(state, &text, &channel_id).await;
                });
            } else {
                warn!(command, "Ignoring unknown slash command");
            }
            StatusCode::OK.into_response()
        }
        InboundEvent::Message {
            channel,
            ts,
            bot_id,
            subtype,
        } => {
            // Skip bot and system messages so the greeting cannot loop.
            if bot_id.is_none() && subtype.is_none() && !channel.is_empty() && !ts.is_empty() {
                tokio::spawn(async move {
                    greet_message(state, &channel, &ts).await;
                });
            }
            StatusCode::OK.into_response()
        }
        InboundEvent::Other => StatusCode::OK.into_response(),
    }
}

/// Fetch, filter, format and post one catalog summary.
async fn run_opendata_invocation(state: Arc<AppState>, text: &str, channel_id: &str) {
    let days = parse_window_days(text);
    info!(days, channel_id, "Handling {} invocation", OPENDATA_COMMAND);

    let records = match state.catalog.fetch_datasets().await {
        Ok(records) => records,
        Err(e) => {
            error!("Catalog fetch failed, dropping summary reply: {}", e);
            return;
        }
    };

    let selected = select_recent(&records, days);
    info!(
        newest = selected.newest.len(),
        updated = selected.updated.len(),
        "Filtered {} catalog records",
        records.len()
    );

    let summary = render_summary(&selected, days);
    if let Err(e) = state.slack.post_message(channel_id, &summary, None).await {
        error!("Failed to post summary to {}: {}", channel_id, e);
    }
}

/// React to a channel message and reply with the fixed greeting in-thread.
async fn greet_message(state: Arc<AppState>, channel: &str, ts: &str) {
    if let Err(e) = state.slack.add_reaction(channel, "robot_face", ts).await {
        error!("Failed to add reaction in {}: {}", channel, e);
    }
    if let Err(e) = state
        .slack
        .post_message(channel, "Hello :wave:", Some(ts))
        .await
    {
        error!("Failed to post greeting in {}: {}", channel, e);
    }
}
