use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Invoke error: {0}")]
    Invoke(String),

    #[error("Payload error: {0}")]
    Payload(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}

impl From<BridgeError> for String {
    fn from(err: BridgeError) -> Self {
        err.to_string()
    }
}
