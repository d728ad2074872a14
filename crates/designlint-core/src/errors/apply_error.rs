//! Remediation (apply fix) errors.

use crate::types::{NodeId, StyleId, VariableId};

use super::error_code::{self, ErrorCode};
use super::DocumentError;

/// Errors raised while applying a suggested fix. Surfaced to the user as a
/// single notification; the rest of the result set stays valid.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Node {node_id} does not support {operation}")]
    UnsupportedNode { node_id: NodeId, operation: &'static str },

    #[error("Text style not found: {0}")]
    StyleNotFound(StyleId),

    #[error("Variable not found: {0}")]
    VariableNotFound(VariableId),

    #[error("Invalid property path '{path}' on node {node_id}")]
    InvalidSlot { node_id: NodeId, path: String },

    #[error("Finding for node {0} has no suggested fix")]
    NoSuggestion(NodeId),

    #[error("Host rejected the change: {0}")]
    Rejected(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl ErrorCode for ApplyError {
    fn error_code(&self) -> &'static str {
        error_code::APPLY_FIX_ERROR
    }
}
