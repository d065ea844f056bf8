//! Host-system responses: directory picker, current user, catalog access token.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::envelope::OperationResult;
use super::node::{scalar, Scalar};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenDirectoryDialogResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_directory: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl OpenDirectoryDialogResult {
    /// `None` when the user cancelled the dialog.
    pub fn selected_directory(&self) -> Option<&str> {
        scalar(&self.selected_directory)
            .map(String::as_str)
            .filter(|dir| !dir.is_empty())
    }
}

impl OperationResult for OpenDirectoryDialogResult {
    type Payload = Scalar<String>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.selected_directory.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.selected_directory
    }

    fn raw_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentUsernameResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl CurrentUsernameResult {
    pub fn username(&self) -> Option<&str> {
        scalar(&self.username).map(String::as_str)
    }
}

impl OperationResult for CurrentUsernameResult {
    type Payload = Scalar<String>;

    fn payload(&self) -> Option<&Self::Payload> {
        self.username.as_ref()
    }

    fn into_payload(self) -> Option<Self::Payload> {
        self.username
    }

    fn raw_error(&self) -> Option<&Value> {
        self.error.as_ref()
    }
}

/// OAuth client-credentials token for the catalog service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<Scalar<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<Scalar<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<Scalar<String>>,
}

impl AccessTokenResponse {
    pub fn access_token(&self) -> Option<&str> {
        scalar(&self.access_token).map(String::as_str)
    }

    pub fn expires_in(&self) -> Option<u64> {
        scalar(&self.expires_in).copied()
    }

    pub fn token_type(&self) -> Option<&str> {
        scalar(&self.token_type).map(String::as_str)
    }
}
