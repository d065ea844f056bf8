//! Uniform access to the `{ payload, error }` envelope every backend call returns.

use serde_json::Value;

use crate::error::BridgeError;

/// A backend response carrying one payload field and an error field.
///
/// The error field is plain data. An absent, `null` or empty-string error
/// means the call succeeded.
pub trait OperationResult: Sized {
    type Payload;

    fn payload(&self) -> Option<&Self::Payload>;

    fn into_payload(self) -> Option<Self::Payload>;

    fn raw_error(&self) -> Option<&Value>;

    /// The error as a message, or `None` on success.
    fn error_message(&self) -> Option<String> {
        self.raw_error().and_then(describe_error)
    }

    fn is_success(&self) -> bool {
        self.error_message().is_none()
    }

    /// Split the envelope into its payload or its error.
    ///
    /// A successful call may still carry no payload.
    fn into_result(self) -> Result<Option<Self::Payload>, BridgeError> {
        match self.error_message() {
            Some(message) => Err(BridgeError::Operation(message)),
            None => Ok(self.into_payload()),
        }
    }
}

/// Render an error field as a message.
///
/// Backend errors that marshal without a message (an empty object, for one)
/// are rendered as their JSON text so the failure is not lost.
pub fn describe_error(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
