//! Per-node processing errors. Logged and swallowed by the traverser.

use crate::types::NodeId;

use super::error_code::{self, ErrorCode};
use super::DocumentError;

#[derive(Debug, thiserror::Error)]
#[error("Failed to process node {node_id}: {source}")]
pub struct NodeError {
    pub node_id: NodeId,
    #[source]
    pub source: DocumentError,
}

impl NodeError {
    pub fn new(node_id: NodeId, source: DocumentError) -> Self {
        Self { node_id, source }
    }
}

impl ErrorCode for NodeError {
    fn error_code(&self) -> &'static str {
        error_code::NODE_PROCESSING_ERROR
    }
}
