//! Engine adapter error types.

use thiserror::Error;

use crate::application::ports::{EngineError, GENERIC_SUBMISSION_ERROR};

/// Errors from the HTTP matching engine adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineHttpError {
    /// Engine answered non-success with an `{error}` body.
    #[error("Engine rejected request ({status}): {reason}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Reason reported by the engine.
        reason: String,
    },

    /// Engine answered non-success without a readable reason.
    #[error("Engine returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Request could not be sent or the response could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body did not match the expected shape.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),
}

impl From<EngineHttpError> for EngineError {
    fn from(err: EngineHttpError) -> Self {
        match err {
            EngineHttpError::Rejected { reason, .. } => Self::Rejected { reason },
            EngineHttpError::Status { .. } => Self::Rejected {
                reason: GENERIC_SUBMISSION_ERROR.to_string(),
            },
            EngineHttpError::Network(message) | EngineHttpError::JsonParse(message) => {
                Self::Transport { message }
            }
        }
    }
}
