//! Log form view-model mapping.
//!
//! Turns a catalog entry picked by the user and a validated log form into the
//! flat record handed to persistence. Validation of the form (presence,
//! ranges) happens before this point; the mapping itself cannot fail.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};

use crate::bindings::CatalogGame;

/// Form values as submitted from the log create/edit screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFormSubmission {
    /// Human-facing status label, e.g. "Completed".
    pub status: String,
    pub rating: u8,
    pub log_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub time_played_hours: u32,
    pub time_played_minutes: u32,
}

/// Catalog reference embedded in a stored log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogGameRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<String>,
}

impl From<&CatalogGame> for LogGameRef {
    fn from(game: &CatalogGame) -> Self {
        Self {
            id: game.id(),
            title: game.name().map(str::to_string),
            cover_id: game.cover_image_id().map(str::to_string),
        }
    }
}

/// A new log, ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogData {
    pub status: String,
    pub rating: u8,
    pub date: String,
    pub notes: String,
    pub minutes_played: u64,
    pub game: LogGameRef,
}

/// Changes to an existing log. The catalog reference is not editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogUpdateData {
    pub id: i64,
    pub status: String,
    pub rating: u8,
    pub date: String,
    pub notes: String,
    pub minutes_played: u64,
}

/// Build the persisted record for a new log.
pub fn build_log_record(selected_game: &CatalogGame, form: &LogFormSubmission) -> LogData {
    LogData {
        status: status_tag(&form.status),
        rating: form.rating,
        date: canonical_timestamp(form.log_date),
        notes: form.notes.clone().unwrap_or_default(),
        minutes_played: total_minutes(form.time_played_hours, form.time_played_minutes),
        game: LogGameRef::from(selected_game),
    }
}

/// Build the update for an existing log from the edit form.
pub fn build_log_update(id: i64, form: &LogFormSubmission) -> LogUpdateData {
    LogUpdateData {
        id,
        status: status_tag(&form.status),
        rating: form.rating,
        date: canonical_timestamp(form.log_date),
        notes: form.notes.clone().unwrap_or_default(),
        minutes_played: total_minutes(form.time_played_hours, form.time_played_minutes),
    }
}

fn status_tag(label: &str) -> String {
    label.to_lowercase()
}

/// Midnight UTC of `date`, as `YYYY-MM-DDTHH:MM:SS.sssZ`.
fn canonical_timestamp(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

// u32 inputs widened to u64 cannot overflow.
fn total_minutes(hours: u32, minutes: u32) -> u64 {
    u64::from(hours) * 60 + u64::from(minutes)
}
