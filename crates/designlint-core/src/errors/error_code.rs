//! ErrorCode trait for the presentation boundary.

/// Every error enum provides a structured code string so the front end can
/// branch on the failure without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCAN_TIMEOUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted wire string: `[ERROR_CODE] message`.
    fn wire_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCAN_TIMEOUT: &str = "SCAN_TIMEOUT";
pub const DISCOVERY_TIMEOUT: &str = "DISCOVERY_TIMEOUT";
pub const DISCOVERY_ERROR: &str = "DISCOVERY_ERROR";
pub const CANCELLED: &str = "CANCELLED";
pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
pub const NODE_PROCESSING_ERROR: &str = "NODE_PROCESSING_ERROR";
pub const APPLY_FIX_ERROR: &str = "APPLY_FIX_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PROTOCOL_ERROR: &str = "PROTOCOL_ERROR";
