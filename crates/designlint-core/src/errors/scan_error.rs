//! Scan errors.

use super::error_code::{self, ErrorCode};
use super::DocumentError;

/// Errors that abort a whole scan request.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(
        "Scan timed out after {elapsed_ms}ms (limit {timeout_ms}ms). Try scanning a smaller selection or a single page."
    )]
    Timeout { elapsed_ms: u64, timeout_ms: u64 },

    #[error("Scan cancelled")]
    Cancelled,

    #[error("Could not resolve scan scope: {0}")]
    Document(#[from] DocumentError),
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Timeout { .. } => error_code::SCAN_TIMEOUT,
            Self::Cancelled => error_code::CANCELLED,
            Self::Document(e) => e.error_code(),
        }
    }
}
