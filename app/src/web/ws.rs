//! WebSocket handler: init handshake + session snapshot streaming.
//!
//! Protocol:
//!   1. Client sends:  `{ "type": "start", "name": "Course Map" }`
//!   2. Server sends:  `{ "type": "init", "session": { ... } | null }`
//!   3. Server streams `{ "type": "session", "session": { ... } }` after every
//!      committed change. Client may send `InputChange` objects at any time;
//!      rejected changes are answered with `{ "type": "error", ... }`.

use std::sync::Arc;
use std::sync::atomic::Ordering;

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;

use super::WebState;
use shotplan::{ErrorResponse, InputChange, SessionSnapshot, ShotError};

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ServerMessage<'a> {
    Init {
        session: Option<&'a SessionSnapshot>,
    },
    Session {
        session: &'a SessionSnapshot,
    },
    Error(ErrorResponse),
}

impl ServerMessage<'_> {
    fn to_message(&self) -> Option<Message> {
        serde_json::to_string(self).ok().map(Message::text)
    }
}

/// GET /api/ws: upgrade to WebSocket.
pub async fn ws_upgrade(
    State(state): State<Arc<WebState>>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_ws(socket, state))
}

async fn handle_ws(socket: WebSocket, state: Arc<WebState>) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    // Phase 1: Wait for "start" message from client
    let client_name = loop {
        match ws_rx.next().await {
            Some(Ok(Message::Text(text))) => {
                if let Some(name) = parse_start_message(&text) {
                    break name;
                }
            }
            Some(Ok(Message::Close(_))) | None => return,
            _ => continue,
        }
    };

    let clients = state.ws_count.fetch_add(1, Ordering::Relaxed) + 1;
    tracing::info!("ws: client '{client_name}' connected ({clients} open)");

    // Phase 2: Send "init" with whatever the session currently holds.
    // Subscribing first means a change racing the init is still delivered.
    let mut session_rx = state.root.session.subscribe();
    let current = session_rx.borrow_and_update().clone();
    let init = ServerMessage::Init {
        session: current.as_ref(),
    };
    let sent = match init.to_message() {
        Some(msg) => ws_tx.send(msg).await.is_ok(),
        None => false,
    };

    // Phase 3: Stream committed snapshots + apply incoming changes
    if sent {
        loop {
            tokio::select! {
                changed = session_rx.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    let latest = session_rx.borrow_and_update().clone();
                    let Some(snapshot) = latest else { continue };
                    let update = ServerMessage::Session { session: &snapshot };
                    let Some(msg) = update.to_message() else { continue };
                    if ws_tx.send(msg).await.is_err() {
                        break;
                    }
                }
                incoming = ws_rx.next() => match incoming {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(reply) = handle_ws_command(&text, &state)
                            && ws_tx.send(reply).await.is_err()
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None | Some(Err(_)) => break,
                    Some(Ok(_)) => {}
                },
            }
        }
    }

    state.ws_count.fetch_sub(1, Ordering::Relaxed);
    tracing::info!("ws: client '{client_name}' disconnected");
}

/// Parse a "start" handshake message. Returns the client name if valid.
fn parse_start_message(text: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct StartMsg {
        #[serde(rename = "type")]
        msg_type: String,
        #[serde(default)]
        name: String,
    }
    let msg: StartMsg = serde_json::from_str(text).ok()?;
    if msg.msg_type == "start" {
        Some(if msg.name.is_empty() {
            "anonymous".to_string()
        } else {
            msg.name
        })
    } else {
        None
    }
}

/// Apply a client-sent `InputChange`. Successful changes reach the client
/// through the session stream; only failures produce a direct reply.
fn handle_ws_command(text: &str, state: &WebState) -> Option<Message> {
    let change: InputChange = match serde_json::from_str(text) {
        Ok(change) => change,
        Err(e) => {
            tracing::debug!("ws: rejecting undecodable command: {e}");
            let err = ShotError::from_decode_message(&e.to_string());
            return ServerMessage::Error(ErrorResponse::from(&err)).to_message();
        }
    };
    match state.root.session.apply(&change) {
        Ok(_) => None,
        Err(e) => ServerMessage::Error(ErrorResponse::from(&e)).to_message(),
    }
}
