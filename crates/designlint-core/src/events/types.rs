//! Event payload types.

use crate::errors::CatalogKind;
use crate::types::NodeId;

/// Payload for `on_scan_started`.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub scope: String,
    pub root_count: usize,
}

/// Payload for `on_scan_progress`, emitted after every batch of roots.
#[derive(Debug, Clone)]
pub struct ScanProgressEvent {
    pub processed: usize,
    pub total: usize,
}

/// Payload for `on_scan_complete`.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub text: usize,
    pub color: usize,
    pub layer: usize,
    pub nodes_visited: usize,
    pub duration_ms: u64,
    pub timed_out: bool,
}

/// Payload for `on_scan_error`.
#[derive(Debug, Clone)]
pub struct ScanErrorEvent {
    pub code: &'static str,
    pub message: String,
}

/// Payload for `on_catalog_refreshed`.
#[derive(Debug, Clone)]
pub struct CatalogRefreshedEvent {
    pub catalog: CatalogKind,
    pub local: usize,
    pub remote: usize,
    pub duration_ms: u64,
}

/// Payload for `on_catalog_fallback`.
#[derive(Debug, Clone)]
pub struct CatalogFallbackEvent {
    pub catalog: CatalogKind,
    pub reason: String,
}

/// Payload for `on_node_failed`.
#[derive(Debug, Clone)]
pub struct NodeFailedEvent {
    pub node_id: NodeId,
    pub message: String,
}

/// Payload for `on_fix_applied`.
#[derive(Debug, Clone)]
pub struct FixAppliedEvent {
    pub node_id: NodeId,
    pub target_id: String,
}

/// Payload for `on_fix_failed`.
#[derive(Debug, Clone)]
pub struct FixFailedEvent {
    pub node_id: NodeId,
    pub message: String,
}
