//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::DesignLintEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn DesignLintEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn DesignLintEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler does not stop the rest from receiving the event.
    fn emit<F: Fn(&dyn DesignLintEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Scan Lifecycle ----
    pub fn emit_scan_started(&self, event: &ScanStartedEvent) {
        self.emit(|h| h.on_scan_started(event));
    }

    pub fn emit_scan_progress(&self, event: &ScanProgressEvent) {
        self.emit(|h| h.on_scan_progress(event));
    }

    pub fn emit_scan_complete(&self, event: &ScanCompleteEvent) {
        self.emit(|h| h.on_scan_complete(event));
    }

    pub fn emit_scan_error(&self, event: &ScanErrorEvent) {
        self.emit(|h| h.on_scan_error(event));
    }

    // ---- Catalog ----
    pub fn emit_catalog_refreshed(&self, event: &CatalogRefreshedEvent) {
        self.emit(|h| h.on_catalog_refreshed(event));
    }

    pub fn emit_catalog_fallback(&self, event: &CatalogFallbackEvent) {
        self.emit(|h| h.on_catalog_fallback(event));
    }

    // ---- Nodes ----
    pub fn emit_node_failed(&self, event: &NodeFailedEvent) {
        self.emit(|h| h.on_node_failed(event));
    }

    // ---- Remediation ----
    pub fn emit_fix_applied(&self, event: &FixAppliedEvent) {
        self.emit(|h| h.on_fix_applied(event));
    }

    pub fn emit_fix_failed(&self, event: &FixFailedEvent) {
        self.emit(|h| h.on_fix_failed(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
