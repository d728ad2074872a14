//! DesignLintEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for handling designlint events.
///
/// Handlers only override the events they care about. `Send + Sync` so a
/// handler can forward to another thread (e.g. a UI bridge).
pub trait DesignLintEventHandler: Send + Sync {
    // ---- Scan Lifecycle ----
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_scan_progress(&self, _event: &ScanProgressEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
    fn on_scan_error(&self, _event: &ScanErrorEvent) {}

    // ---- Catalog ----
    fn on_catalog_refreshed(&self, _event: &CatalogRefreshedEvent) {}
    fn on_catalog_fallback(&self, _event: &CatalogFallbackEvent) {}

    // ---- Nodes ----
    fn on_node_failed(&self, _event: &NodeFailedEvent) {}

    // ---- Remediation ----
    fn on_fix_applied(&self, _event: &FixAppliedEvent) {}
    fn on_fix_failed(&self, _event: &FixFailedEvent) {}
}
