use std::sync::Arc;

use axum::extract::ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use tokio::sync::Mutex;

use skinsmith_core::preview::PreviewSession;

use crate::state::{AppState, MillenniumState};
use crate::ws::manager::WsManager;

/// GET /api/v1/millennium/themes/{name}/preview/ws
///
/// Upgrades the connection to the live preview channel. Inbound text
/// frames carry full stylesheet replacements; each one is answered with
/// a `{ "status": ..., "message": ... }` ack.
pub async fn preview_ws_handler(
    ws: WebSocketUpgrade,
    Path(theme_name): Path<String>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.millennium() {
        Ok(millennium) => ws
            .on_upgrade(move |socket| {
                handle_socket(socket, state.ws_manager, millennium, theme_name)
            })
            .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Manage a single preview connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the connection with `WsManager`.
///   2. Spawns a sender task that forwards messages from the manager channel.
///   3. Feeds inbound stylesheet frames into the preview session.
///   4. Stops the preview and cleans up on disconnect.
async fn handle_socket(
    socket: WebSocket,
    ws_manager: Arc<WsManager>,
    millennium: MillenniumState,
    theme_name: String,
) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(conn_id = %conn_id, theme = %theme_name, "Preview WebSocket connected");

    // Register and get the receiver for outbound messages.
    let mut rx = ws_manager.add(conn_id.clone(), theme_name.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward channel messages to the WebSocket sink.
    let sender_conn_id = conn_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(conn_id = %sender_conn_id, "WebSocket sink closed");
                break;
            }
        }
    });

    // Receiver loop: every text frame is a full stylesheet replacement.
    // Content-level failures come back as error acks and never close the
    // connection; only transport errors end the loop.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Text(css)) => {
                let ack = millennium.preview.lock().await.update(css.as_str());
                let payload = match serde_json::to_string(&ack) {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize preview ack");
                        continue;
                    }
                };
                ws_manager
                    .send_to(&conn_id, Message::Text(Utf8Bytes::from(payload)))
                    .await;
            }
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(conn_id = %conn_id, "Pong received");
            }
            Ok(_) => {
                // Binary frames are not part of the protocol; ignore.
            }
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    // Transport gone: end the preview session and deregister.
    stop_preview(&millennium.preview).await;
    ws_manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Preview WebSocket disconnected");
}

async fn stop_preview(preview: &Arc<Mutex<PreviewSession>>) {
    preview.lock().await.stop();
}
