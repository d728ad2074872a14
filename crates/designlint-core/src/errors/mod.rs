//! Error handling for designlint.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod apply_error;
pub mod catalog_error;
pub mod config_error;
pub mod document_error;
pub mod error_code;
pub mod node_error;
pub mod protocol_error;
pub mod scan_error;

pub use apply_error::ApplyError;
pub use catalog_error::{CatalogError, CatalogKind};
pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::ErrorCode;
pub use node_error::NodeError;
pub use protocol_error::ProtocolError;
pub use scan_error::ScanError;
