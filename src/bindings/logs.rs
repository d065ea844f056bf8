//! Play-log shapes: stored records, form echoes and insert responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::{describe_error, OperationResult};
use super::node::{item, scalar, Keyed, Node, Scalar};

/// A duration split for display into whole hours and leftover minutes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePlayed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<Scalar<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<Scalar<u64>>,
}

impl TimePlayed {
    pub fn from_minutes(total: u64) -> Self {
        Self {
            hours: Some(Scalar::Typed(total / 60)),
            minutes: Some(Scalar::Typed(total % 60)),
        }
    }

    pub fn hours(&self) -> Option<u64> {
        scalar(&self.hours).copied()
    }

    pub fn minutes(&self) -> Option<u64> {
        scalar(&self.minutes).copied()
    }

    /// `None` when either part is missing or the sum does not fit.
    pub fn total_minutes(&self) -> Option<u64> {
        self.hours()?.checked_mul(60)?.checked_add(self.minutes()?)
    }
}

/// A persisted play log as the backend returns it.
///
/// `date` and `status` are forwarded exactly as produced; their encoding
/// belongs to the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Scalar<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<Scalar<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_played_minutes: Option<Scalar<u64>>,
}

impl LogRecord {
    pub fn title(&self) -> Option<&str> {
        scalar(&self.title).map(String::as_str)
    }

    pub fn rating(&self) -> Option<u32> {
        scalar(&self.rating).copied()
    }

    pub fn notes(&self) -> Option<&str> {
        scalar(&self.notes).map(String::as_str)
    }

    pub fn status_id(&self) -> Option<&str> {
        scalar(&self.status_id).map(String::as_str)
    }

    pub fn finished(&self) -> Option<bool> {
        scalar(&self.finished).copied()
    }

    pub fn time_played_minutes(&self) -> Option<u64> {
        scalar(&self.time_played_minutes).copied()
    }

    pub fn time_played(&self) -> Option<TimePlayed> {
        self.time_played_minutes().map(TimePlayed::from_minutes)
    }

    /// Lower-case status tag, read from whichever form the backend used.
    ///
    /// Accepts a bare label, a status object with a `Status` key, and falls
    /// back to `statusId`.
    pub fn status_tag(&self) -> Option<String> {
        let label = match self.status.as_ref() {
            Some(Value::String(label)) => Some(label.as_str()),
            Some(Value::Object(status)) => status.get("Status").and_then(Value::as_str),
            _ => None,
        };
        label
            .filter(|label| !label.is_empty())
            .or_else(|| self.status_id().filter(|id| !id.is_empty()))
            .map(str::to_lowercase)
    }
}

/// Catalog entry recorded alongside stored logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggedGame {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_id: Option<Scalar<String>>,
}

impl LoggedGame {
    pub fn id(&self) -> Option<i64> {
        scalar(&self.id).copied()
    }

    pub fn title(&self) -> Option<&str> {
        scalar(&self.title).map(String::as_str)
    }

    /// Empty cover ids are stored for games without artwork.
    pub fn cover_id(&self) -> Option<&str> {
        scalar(&self.cover_id)
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }
}

/// A row of the log table joined with its game, as the log queries return it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Scalar<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Scalar<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_played: Option<Scalar<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game: Option<Node<LoggedGame>>,
}

impl StoredLog {
    pub fn id(&self) -> Option<i64> {
        scalar(&self.id).copied()
    }

    pub fn rating(&self) -> Option<u32> {
        scalar(&self.rating).copied()
    }

    pub fn notes(&self) -> Option<&str> {
        scalar(&self.notes).map(String::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        scalar(&self.status).map(String::as_str)
    }

    pub fn minutes_played(&self) -> Option<u64> {
        scalar(&self.minutes_played).copied()
    }

    pub fn time_played(&self) -> Option<TimePlayed> {
        self.minutes_played().map(TimePlayed::from_minutes)
    }

    pub fn game(&self) -> Option<&LoggedGame> {
        item(&self.game)
    }
}

/// The create/edit form as the backend echoes it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogFormResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Scalar<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<Scalar<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_played: Option<Node<TimePlayed>>,
}

impl LogFormResult {
    pub fn title(&self) -> Option<&str> {
        scalar(&self.title).map(String::as_str)
    }

    pub fn status(&self) -> Option<&str> {
        scalar(&self.status).map(String::as_str)
    }

    pub fn time_played(&self) -> Option<&TimePlayed> {
        item(&self.time_played)
    }
}

/// Response of a log insert: the stored log, or validation errors by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertLogResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log: Option<Node<LogRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Keyed<String>>,
}

impl InsertLogResult {
    pub fn log(&self) -> Option<&LogRecord> {
        item(&self.log)
    }

    /// Validation messages that arrived as plain strings, keyed by field.
    pub fn field_errors(&self) -> Vec<(&str, &str)> {
        match &self.errors {
            Some(Keyed::Map(errors)) => errors
                .iter()
                .filter_map(|(field, message)| {
                    message.as_item().map(|message| (field.as_str(), message.as_str()))
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl OperationResult for InsertLogResult {
    type Payload = Node<LogRecord>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.log.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.log
    }

    fn raw_error(&self) -> Option<&Value> {
        None
    }

    fn error_message(&self) -> Option<String> {
        match self.errors.as_ref()? {
            Keyed::Map(errors) => {
                let messages: Vec<String> = errors
                    .iter()
                    .filter_map(|(field, message)| {
                        field_message(message).map(|message| format!("{}: {}", field, message))
                    })
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            Keyed::Raw(value) => describe_error(value),
        }
    }
}

fn field_message(message: &Node<String>) -> Option<String> {
    match message {
        Node::Item(text) if text.is_empty() => None,
        Node::Item(text) => Some(text.clone()),
        Node::Raw(value) => describe_error(value),
        Node::List(_) => serde_json::to_string(message).ok(),
    }
}

/// Play-time totals for a date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_minutes_played: Option<Scalar<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_games_played: Option<Scalar<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_games_completed: Option<Scalar<u64>>,
}

impl DashboardStatistics {
    pub fn total_time_played(&self) -> Option<TimePlayed> {
        scalar(&self.total_minutes_played)
            .copied()
            .map(TimePlayed::from_minutes)
    }

    pub fn total_games_played(&self) -> Option<u64> {
        scalar(&self.total_games_played).copied()
    }

    pub fn total_games_completed(&self) -> Option<u64> {
        scalar(&self.total_games_completed).copied()
    }
}
