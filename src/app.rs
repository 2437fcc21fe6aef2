use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/events", get(handlers::list_events).post(handlers::record_event))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/streaks", get(handlers::get_streaks))
        .with_state(state)
}
