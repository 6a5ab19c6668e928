use std::convert::Infallible;

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::{error::RecvError, Receiver};
use tracing::debug;

use crate::state::AppState;
use crate::store::StoreEvent;

/// GET /api/events
/// Server-sent stream of store change and reset events.
pub async fn handle_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.store.lock().subscribe();
    Sse::new(stream::unfold(receiver, next_event)).keep_alive(KeepAlive::default())
}

async fn next_event(
    mut receiver: Receiver<StoreEvent>,
) -> Option<(Result<Event, Infallible>, Receiver<StoreEvent>)> {
    loop {
        match receiver.recv().await {
            Ok(event) => {
                let sse = Event::default()
                    .event("store")
                    .json_data(&event)
                    .unwrap_or_else(|_| Event::default().event("store"));
                return Some((Ok(sse), receiver));
            }
            Err(RecvError::Lagged(skipped)) => {
                debug!("SSE client lagged, skipped {skipped} event(s)");
            }
            Err(RecvError::Closed) => return None,
        }
    }
}
