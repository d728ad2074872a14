//! Presentation protocol errors.

use super::error_code::{self, ErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    #[error("Could not encode response: {0}")]
    Encode(serde_json::Error),
}

impl ErrorCode for ProtocolError {
    fn error_code(&self) -> &'static str {
        error_code::PROTOCOL_ERROR
    }
}
