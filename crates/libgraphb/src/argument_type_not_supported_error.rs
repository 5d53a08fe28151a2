use thiserror::Error;

/// Raised when a dynamic value cannot be coerced into a
/// [`Value`](crate::Value).
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Argument value type is not supported: `{value}`")]
pub struct ArgumentTypeNotSupportedError {
    pub value: serde_json::Value,
}
