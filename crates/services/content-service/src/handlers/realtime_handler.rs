//! Server-sent change notifications.

use std::convert::Infallible;

use axum::{
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures::{Stream, StreamExt};
use tracing::{debug, warn};

use common::{AppError, AppResult};
use domain::{is_watched_table, ChangeEvent};

use crate::state::AppState;

/// Create realtime routes
pub fn realtime_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(watch_all))
        .route("/:table", get(watch_table))
}

/// Stream changes to every content table
#[utoipa::path(
    get,
    path = "/api/realtime",
    tag = "Realtime",
    responses(
        (
            status = 200,
            description = "Event stream of ChangeEvent",
            content_type = "text/event-stream",
            body = ChangeEvent
        )
    )
)]
pub async fn watch_all(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    debug!("Realtime subscriber connected");
    Sse::new(event_stream(&state, None)).keep_alive(KeepAlive::default())
}

/// Stream changes to one table
#[utoipa::path(
    get,
    path = "/api/realtime/{table}",
    tag = "Realtime",
    params(("table" = String, Path, description = "Table name, e.g. destinations")),
    responses(
        (
            status = 200,
            description = "Event stream of ChangeEvent",
            content_type = "text/event-stream",
            body = ChangeEvent
        ),
        (status = 404, description = "Unknown table")
    )
)]
pub async fn watch_table(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> AppResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    if !is_watched_table(&table) {
        return Err(AppError::NotFound);
    }
    debug!(table = %table, "Realtime subscriber connected");
    Ok(Sse::new(event_stream(&state, Some(table))).keep_alive(KeepAlive::default()))
}

fn event_stream(
    state: &AppState,
    table: Option<String>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    state.feed.watch(table).filter_map(|change| async move {
        match Event::default()
            .event(change.kind.to_string())
            .json_data(&change)
        {
            Ok(event) => Some(Ok(event)),
            Err(e) => {
                warn!(error = %e, "Failed to encode change event");
                None
            }
        }
    })
}
