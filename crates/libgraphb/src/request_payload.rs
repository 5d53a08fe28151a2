use crate::OperationBuildError;
use serde::Serialize;
use thiserror::Error;

/// Body of a GraphQL-over-HTTP request.
#[derive(Debug, Serialize)]
pub(crate) struct RequestPayload<'a> {
    pub query: &'a str,
}

#[derive(Debug, Error)]
pub enum RequestPayloadError {
    #[error("Operation failed validation")]
    InvalidOperation(#[from] OperationBuildError),

    #[error("Failure serializing the request payload")]
    Serialization(#[from] serde_json::Error),
}
