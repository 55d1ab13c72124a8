use crate::{dto::QueryEventMessage, state::AppState};
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures::{Sink, SinkExt, Stream, StreamExt};
use querytail_application::services::{BroadcastHub, Subscription};
use std::fmt::Display;
use tracing::{debug, info, warn};

/// `GET /ws`: upgrades and streams query events to the viewer.
pub async fn query_stream(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket: WebSocket| async move {
        let (sink, inbound) = socket.split();
        serve_subscriber(state.hub, sink, inbound).await;
    })
}

/// Drives one viewer connection until it goes away.
///
/// Queued events are written as JSON text frames. The inbound side is only
/// watched for liveness: payloads are ignored, while a close frame, end of
/// stream or transport error ends the connection. A failed write ends it
/// too. The subscriber is always unregistered on the way out.
pub async fn serve_subscriber<Si, St, E>(hub: BroadcastHub, mut sink: Si, mut inbound: St)
where
    Si: Sink<Message> + Unpin,
    Si::Error: Display,
    St: Stream<Item = Result<Message, E>> + Unpin,
    E: Display,
{
    let Subscription { id, mut events } = hub.connect();
    info!(subscriber = %id, "Viewer connected");

    let reason = loop {
        tokio::select! {
            event = events.recv() => {
                let Some(event) = event else {
                    break "dropped by hub";
                };
                let payload = match serde_json::to_string(&QueryEventMessage::from(&event)) {
                    Ok(payload) => payload,
                    Err(e) => {
                        warn!(subscriber = %id, error = %e, "Failed to encode event");
                        continue;
                    }
                };
                if let Err(e) = sink.send(Message::Text(payload.into())).await {
                    debug!(subscriber = %id, error = %e, "Send to viewer failed");
                    break "send failed";
                }
            }
            frame = inbound.next() => match frame {
                Some(Ok(Message::Close(_))) | None => break "closed by viewer",
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!(subscriber = %id, error = %e, "Viewer transport error");
                    break "transport error";
                }
            }
        }
    };

    hub.unsubscribe(id);
    let _ = sink.close().await;
    info!(subscriber = %id, reason, "Viewer disconnected");
}
