//! Log status catalog.
//!
//! Provides two loading methods:
//! - `default_statuses()` - Loads the catalog compiled into the binary
//! - `load_statuses(path)` - Loads a custom catalog from a file path

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Default catalog embedded at compile time from `config/statuses.toml`.
const DEFAULT_STATUSES: &str = include_str!("../config/statuses.toml");

/// One selectable log status.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatusDefinition {
    /// Label shown in the form, e.g. "Completed"
    pub label: String,
    /// Sort key for lists and filters (lower sorts first)
    pub order: u32,
}

impl StatusDefinition {
    /// Tag stored on a log record.
    pub fn tag(&self) -> String {
        self.label.to_lowercase()
    }
}

/// The closed set of statuses a log may carry.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCatalog {
    #[serde(rename = "status", default)]
    statuses: Vec<StatusDefinition>,
}

impl StatusCatalog {
    /// Look up a status by label or tag, ignoring case.
    pub fn find(&self, label: &str) -> Option<&StatusDefinition> {
        let label = label.trim();
        self.statuses
            .iter()
            .find(|status| status.label.eq_ignore_ascii_case(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }

    /// Statuses sorted by their `order` key.
    pub fn ordered(&self) -> Vec<&StatusDefinition> {
        let mut statuses: Vec<_> = self.statuses.iter().collect();
        statuses.sort_by_key(|status| status.order);
        statuses
    }

    /// Every label, in display order. Used as the default log filter.
    pub fn labels(&self) -> Vec<&str> {
        self.ordered()
            .into_iter()
            .map(|status| status.label.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }
}

/// Load a status catalog from a TOML file at the given path.
pub fn load_statuses(path: &Path) -> Result<StatusCatalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog: StatusCatalog = toml::from_str(&content)?;
    Ok(catalog)
}

/// Get the catalog embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (this would be a compile-time bug).
pub fn default_statuses() -> StatusCatalog {
    toml::from_str(DEFAULT_STATUSES).expect("embedded statuses.toml must be valid TOML")
}
