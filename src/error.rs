use std::error::Error as StdError;

/// Errors surfaced while building or submitting telemetry envelopes.
///
/// Messages never contain envelope contents or the instrumentation key.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Caller-supplied data failed a precondition (empty instrumentation
    /// key, empty batch). Detected before any serialization or network
    /// attempt; fix the input and call again.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Telemetry data failed to serialize to JSON.
    ///
    /// Note: This is an error in this crate. If you spot this, please open
    /// an issue.
    #[error("serializing upload request failed with {0}")]
    SerializeRequest(serde_json::Error),

    /// Could not complete the HTTP request to the ingestion endpoint. Not
    /// retried; surfaced unmodified to the caller.
    #[error("sending upload request failed with {0}")]
    Transport(Box<dyn StdError + Send + Sync + 'static>),
}
