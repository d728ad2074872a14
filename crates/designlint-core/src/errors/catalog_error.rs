//! Catalog discovery errors. These never reach a caller: the cache
//! degrades to local-only definitions instead.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error_code::{self, ErrorCode};

/// Which catalog a discovery run was building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    TextStyles,
    ColorVariables,
}

impl CatalogKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TextStyles => "text_styles",
            Self::ColorVariables => "color_variables",
        }
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("{catalog} discovery timed out after {timeout_ms}ms")]
    DiscoveryTimeout { catalog: CatalogKind, timeout_ms: u64 },

    #[error("{catalog} discovery failed: {message}")]
    Discovery { catalog: CatalogKind, message: String },

    #[error("{catalog} discovery cancelled")]
    Cancelled { catalog: CatalogKind },
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DiscoveryTimeout { .. } => error_code::DISCOVERY_TIMEOUT,
            Self::Discovery { .. } => error_code::DISCOVERY_ERROR,
            Self::Cancelled { .. } => error_code::CANCELLED,
        }
    }
}
