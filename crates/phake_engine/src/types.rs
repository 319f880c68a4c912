use phake_core::{AnalysisError, AnalysisPayload, Generation, CONNECTIVITY_MESSAGE};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        generation: Generation,
        outcome: Result<AnalysisPayload, AnalysisError>,
    },
}

/// Everything that can go wrong between building a request and holding a
/// parsed payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("timeout: {0}")]
    Timeout(String),
    #[error("service responded with status {status}")]
    Service { status: u16, message: Option<String> },
    #[error("response too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text shown to the user. Only the service's own message is passed
    /// through; every other failure reads as a connectivity problem.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Service {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => CONNECTIVITY_MESSAGE.to_string(),
        }
    }
}

impl From<ClientError> for AnalysisError {
    fn from(err: ClientError) -> Self {
        AnalysisError::new(err.user_message())
    }
}
