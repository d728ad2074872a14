//! Errors raised by the host document capability.

use crate::types::{NodeId, StyleId, VariableId};

use super::error_code::{self, ErrorCode};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DocumentError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("Text style {id} could not be read: {message}")]
    StyleUnreadable { id: StyleId, message: String },

    #[error("Variable {id} could not be read: {message}")]
    VariableUnreadable { id: VariableId, message: String },

    #[error("Host document error: {0}")]
    Host(String),
}

impl ErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NodeNotFound(_) => error_code::NODE_NOT_FOUND,
            _ => error_code::DOCUMENT_ERROR,
        }
    }
}
