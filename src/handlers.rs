use crate::aggregate::{aggregate, resolve_window_start};
use crate::calendar::{calendar_for_window, ActivityCalendar};
use crate::date_key::{parse_date, DateKey};
use crate::errors::AppError;
use crate::models::{CalendarQuery, EventsResponse, RecordEventRequest, RecordEventResponse};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::streak::StreakResult;
use axum::{
    extract::{Query, State},
    Json,
};
use tracing::info;

pub async fn record_event(
    State(state): State<AppState>,
    Json(payload): Json<RecordEventRequest>,
) -> Result<Json<RecordEventResponse>, AppError> {
    let timestamp = match payload.timestamp.as_deref().map(str::trim) {
        Some(raw) => raw.to_string(),
        None => state.config.now_timestamp(),
    };
    let date = parse_date(&timestamp)
        .ok_or_else(|| AppError::invalid_date("timestamp", &timestamp))?;

    let mut data = state.data.lock().await;
    let mut updated = data.clone();
    updated.events.push(timestamp.clone());
    persist_data(&state.config.data_path, &updated).await?;
    *data = updated;

    let count_on_date = aggregate(&data.events).count(date);
    info!(%date, count_on_date, "recorded activity event");

    Ok(Json(RecordEventResponse {
        timestamp,
        date: date.key(),
        count_on_date,
    }))
}

pub async fn list_events(State(state): State<AppState>) -> Json<EventsResponse> {
    let data = state.data.lock().await;
    Json(EventsResponse {
        events: data.events.clone(),
    })
}

pub async fn get_calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<ActivityCalendar>, AppError> {
    Ok(Json(calendar_for(&state, &query).await?))
}

pub async fn get_streaks(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<StreakResult>, AppError> {
    Ok(Json(calendar_for(&state, &query).await?.streaks))
}

async fn calendar_for(
    state: &AppState,
    query: &CalendarQuery,
) -> Result<ActivityCalendar, AppError> {
    let today = match query.today.as_deref() {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::invalid_date("today", raw))?,
        None => state.config.today(),
    };

    let (record, first_activity) = {
        let data = state.data.lock().await;
        let first_activity = match query.start.as_deref() {
            Some(raw) => raw.to_string(),
            None => earliest_event(&data.events).unwrap_or_default(),
        };
        (aggregate(&data.events), first_activity)
    };

    let start = resolve_window_start(&first_activity, today, state.config.fallback_days);
    let window_days = start.days_until(today) + 1;
    if window_days > state.config.max_window_days {
        return Err(AppError::bad_request(format!(
            "window {start}..{today} spans {window_days} days, limit is {}",
            state.config.max_window_days
        )));
    }

    Ok(calendar_for_window(&record, start, today))
}

fn earliest_event(events: &[String]) -> Option<String> {
    events
        .iter()
        .filter_map(|raw| parse_date(raw).map(|date: DateKey| (date, raw)))
        .min_by_key(|(date, _)| *date)
        .map(|(_, raw)| raw.clone())
}
