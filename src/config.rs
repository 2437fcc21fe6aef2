use crate::aggregate::DEFAULT_FALLBACK_DAYS;
use crate::date_key::DateKey;
use chrono::{FixedOffset, Offset, SecondsFormat, Utc};
use std::{env, path::PathBuf};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/events.json";
const MAX_OFFSET_MINUTES: i32 = 18 * 60;
const MAX_FALLBACK_DAYS: i64 = 366;
const DEFAULT_MAX_WINDOW_DAYS: i64 = 3 * 366;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub fallback_days: i64,
    /// Longest `[start, today]` window a calendar request may ask for.
    pub max_window_days: i64,
    /// Fixed reference zone used for "today" and for stamping new events.
    pub offset: FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            fallback_days: DEFAULT_FALLBACK_DAYS,
            max_window_days: DEFAULT_MAX_WINDOW_DAYS,
            offset: utc(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let fallback_days = match lookup("APP_FALLBACK_DAYS") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(days) if (0..=MAX_FALLBACK_DAYS).contains(&days) => days,
                _ => {
                    warn!(%value, "ignoring invalid APP_FALLBACK_DAYS");
                    defaults.fallback_days
                }
            },
            None => defaults.fallback_days,
        };

        let max_window_days = match lookup("APP_MAX_WINDOW_DAYS") {
            Some(value) => match value.trim().parse::<i64>() {
                Ok(days) if days > 0 => days,
                _ => {
                    warn!(%value, "ignoring invalid APP_MAX_WINDOW_DAYS");
                    defaults.max_window_days
                }
            },
            None => defaults.max_window_days,
        };

        let offset = match lookup("APP_UTC_OFFSET_MINUTES") {
            Some(value) => parse_offset(&value).unwrap_or_else(|| {
                warn!(%value, "ignoring invalid APP_UTC_OFFSET_MINUTES, using UTC");
                utc()
            }),
            None => defaults.offset,
        };

        Self {
            port,
            data_path,
            fallback_days,
            max_window_days,
            offset,
        }
    }

    pub fn today(&self) -> DateKey {
        DateKey::from(Utc::now().with_timezone(&self.offset).date_naive())
    }

    pub fn now_timestamp(&self) -> String {
        Utc::now()
            .with_timezone(&self.offset)
            .to_rfc3339_opts(SecondsFormat::Secs, false)
    }
}

fn parse_offset(value: &str) -> Option<FixedOffset> {
    let minutes = value.trim().parse::<i32>().ok()?;
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return None;
    }
    FixedOffset::east_opt(minutes * 60)
}

fn utc() -> FixedOffset {
    Utc.fix()
}
