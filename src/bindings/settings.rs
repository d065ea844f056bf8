//! User preferences and monitored-executable shapes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::OperationResult;
use super::node::{item, scalar, Node, Scalar};

/// Separator of the executable path list stored in [`UserSettings`].
pub const EXECUTABLE_PATH_SEPARATOR: &str = ";";

/// Process-wide user configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_paths: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub process_monitoring_enabled: Option<Scalar<bool>>,
}

impl UserSettings {
    /// Monitored paths, in stored order. Empty segments are dropped.
    pub fn executable_paths(&self) -> Vec<&str> {
        scalar(&self.executable_paths)
            .map(|paths| split_paths(paths.as_str()))
            .unwrap_or_default()
    }

    /// Monitoring is off unless the backend explicitly says otherwise.
    pub fn process_monitoring_enabled(&self) -> bool {
        scalar(&self.process_monitoring_enabled)
            .copied()
            .unwrap_or(false)
    }
}

/// Argument of the settings-save call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsData {
    pub executable_paths: String,
    pub process_monitoring_enabled: bool,
}

impl UserSettingsData {
    pub fn new<S: AsRef<str>>(paths: &[S], process_monitoring_enabled: bool) -> Self {
        let executable_paths = paths
            .iter()
            .map(|path| -> &str { path.as_ref() })
            .filter(|path| !path.is_empty())
            .collect::<Vec<_>>()
            .join(EXECUTABLE_PATH_SEPARATOR);
        Self {
            executable_paths,
            process_monitoring_enabled,
        }
    }
}

impl From<&UserSettings> for UserSettingsData {
    fn from(settings: &UserSettings) -> Self {
        Self::new(
            settings.executable_paths().as_slice(),
            settings.process_monitoring_enabled(),
        )
    }
}

fn split_paths(paths: &str) -> Vec<&str> {
    paths
        .split(EXECUTABLE_PATH_SEPARATOR)
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .collect()
}

/// Links a monitored executable to a catalog entry and its play time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutableDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executable_name: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<Scalar<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_played: Option<Scalar<u64>>,
}

impl ExecutableDetails {
    pub fn new(executable_name: &str, game_id: i64, minutes_played: u64) -> Self {
        Self {
            executable_name: Some(Scalar::Typed(executable_name.to_string())),
            game_id: Some(Scalar::Typed(game_id)),
            minutes_played: Some(Scalar::Typed(minutes_played)),
        }
    }

    pub fn executable_name(&self) -> Option<&str> {
        scalar(&self.executable_name).map(String::as_str)
    }

    pub fn game_id(&self) -> Option<i64> {
        scalar(&self.game_id).copied()
    }

    pub fn minutes_played(&self) -> Option<u64> {
        scalar(&self.minutes_played).copied()
    }

    /// The insert argument for these details, when name and game are both known.
    pub fn link(&self) -> Option<ExecutableLink> {
        Some(ExecutableLink::new(self.executable_name()?, self.game_id()?))
    }
}

/// Argument of the executable-details insert: a process name and the logged
/// game it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutableLink {
    pub name: String,
    pub game_id: i64,
}

impl ExecutableLink {
    pub fn new(name: &str, game_id: i64) -> Self {
        Self {
            name: name.to_string(),
            game_id,
        }
    }
}

/// Response of the settings fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettingsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Node<UserSettings>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl UserSettingsResult {
    pub fn preferences(&self) -> Option<&UserSettings> {
        item(&self.preferences)
    }
}

impl OperationResult for UserSettingsResult {
    type Payload = Node<UserSettings>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.preferences.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.preferences
    }

    fn raw_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}

/// Response of an executable-details insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsertExecutableDetailsResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Node<ExecutableDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl InsertExecutableDetailsResult {
    pub fn details(&self) -> Option<&ExecutableDetails> {
        item(&self.details)
    }
}

impl OperationResult for InsertExecutableDetailsResult {
    type Payload = Node<ExecutableDetails>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.details.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.details
    }

    fn raw_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::reconstruct;
    use serde_json::json;

    #[test]
    fn test_executable_paths_split() {
        let node: Node<UserSettings> = reconstruct(json!({
            "executablePaths": "/games/doom;;/opt/steam ;",
            "processMonitoringEnabled": true
        }));
        let settings = node.into_item().unwrap();
        assert_eq!(settings.executable_paths(), vec!["/games/doom", "/opt/steam"]);
        assert!(settings.process_monitoring_enabled());
    }

    #[test]
    fn test_missing_settings_fields() {
        let node: Node<UserSettings> = reconstruct(json!({}));
        let settings = node.into_item().unwrap();
        assert!(settings.executable_paths.is_none());
        assert!(settings.executable_paths().is_empty());
        assert!(!settings.process_monitoring_enabled());
    }

    #[test]
    fn test_settings_data_joins_paths() {
        let data = UserSettingsData::new(&["/a", "", "/b"], false);
        assert_eq!(data.executable_paths, "/a;/b");
        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({ "executablePaths": "/a;/b", "processMonitoringEnabled": false })
        );
    }

    #[test]
    fn test_settings_result_with_go_error_object() {
        let node: Node<UserSettingsResult> = reconstruct(json!({
            "preferences": { "executablePaths": "", "processMonitoringEnabled": false },
            "error": {}
        }));
        let result = node.into_item().unwrap();
        assert!(result.preferences().is_some());
        assert_eq!(result.error_message(), Some("{}".to_string()));
    }

    #[test]
    fn test_settings_result_null_error_is_success() {
        let node: Node<UserSettingsResult> = reconstruct(json!({
            "preferences": { "executablePaths": "/x", "processMonitoringEnabled": true },
            "error": null
        }));
        let result = node.into_item().unwrap();
        assert!(result.is_success());
        let settings = UserSettingsData::from(result.preferences().unwrap());
        assert_eq!(settings.executable_paths, "/x");
    }

    #[test]
    fn test_executable_details_accessors() {
        let node: Node<InsertExecutableDetailsResult> = reconstruct(json!({
            "details": { "executableName": "doom.exe", "gameId": 42, "minutesPlayed": 90 },
            "error": null
        }));
        let result = node.into_item().unwrap();
        let details = result.details().unwrap();
        assert_eq!(details.executable_name(), Some("doom.exe"));
        assert_eq!(details.game_id(), Some(42));
        assert_eq!(details.minutes_played(), Some(90));
    }

    #[test]
    fn test_executable_link_from_details() {
        let details = ExecutableDetails::new("doom.exe", 42, 90);
        let link = details.link().unwrap();
        assert_eq!(
            serde_json::to_value(&link).unwrap(),
            json!({ "name": "doom.exe", "game_id": 42 })
        );

        let node: Node<ExecutableDetails> = reconstruct(json!({ "executableName": "doom.exe" }));
        assert_eq!(node.into_item().unwrap().link(), None);
    }
}
