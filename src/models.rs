use serde::{Deserialize, Serialize};

/// Persisted raw event timestamps, in the order they were recorded.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppData {
    pub events: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RecordEventRequest {
    pub timestamp: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordEventResponse {
    pub timestamp: String,
    pub date: String,
    pub count_on_date: u32,
}

#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CalendarQuery {
    pub start: Option<String>,
    pub today: Option<String>,
}
