pub mod aggregate;
pub mod app;
pub mod calendar;
pub mod config;
pub mod date_key;
pub mod errors;
pub mod grid;
pub mod handlers;
pub mod labels;
pub mod models;
pub mod state;
pub mod storage;
pub mod streak;
pub mod tier;

pub use app::router;
pub use calendar::{build_calendar, calendar_for_window, ActivityCalendar, CalendarCell};
pub use config::Config;
pub use date_key::{parse_date, DateKey};
pub use state::AppState;
pub use storage::load_data;
