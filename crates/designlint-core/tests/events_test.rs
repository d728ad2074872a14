//! Tests for the designlint event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use designlint_core::errors::CatalogKind;
use designlint_core::events::types::*;
use designlint_core::events::{DesignLintEventHandler, EventDispatcher};
use designlint_core::types::NodeId;

#[derive(Default)]
struct CountingHandler {
    scan_started: AtomicUsize,
    scan_progress: AtomicUsize,
    fallbacks: AtomicUsize,
    fixes: AtomicUsize,
}

impl DesignLintEventHandler for CountingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        self.scan_started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_scan_progress(&self, _event: &ScanProgressEvent) {
        self.scan_progress.fetch_add(1, Ordering::Relaxed);
    }

    fn on_catalog_fallback(&self, _event: &CatalogFallbackEvent) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    fn on_fix_applied(&self, _event: &FixAppliedEvent) {
        self.fixes.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl DesignLintEventHandler for PanickingHandler {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {
        panic!("handler bug");
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct NoopHandler;
    impl DesignLintEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_scan_complete(&ScanCompleteEvent {
        text: 1,
        color: 2,
        layer: 3,
        nodes_visited: 10,
        duration_ms: 5,
        timed_out: false,
    });
    handler.on_node_failed(&NodeFailedEvent {
        node_id: NodeId::new("1:1"),
        message: "unreadable".into(),
    });
}

#[test]
fn test_empty_dispatcher_is_silent() {
    let dispatcher = EventDispatcher::new();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_scan_progress(&ScanProgressEvent {
        processed: 1,
        total: 2,
    });
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.emit_scan_started(&ScanStartedEvent {
        scope: "page".into(),
        root_count: 3,
    });
    dispatcher.emit_catalog_fallback(&CatalogFallbackEvent {
        catalog: CatalogKind::TextStyles,
        reason: "timeout".into(),
    });
    dispatcher.emit_fix_applied(&FixAppliedEvent {
        node_id: NodeId::new("1:2"),
        target_id: "S:1".into(),
    });

    for h in [&a, &b] {
        assert_eq!(h.scan_started.load(Ordering::Relaxed), 1);
        assert_eq!(h.fallbacks.load(Ordering::Relaxed), 1);
        assert_eq!(h.fixes.load(Ordering::Relaxed), 1);
        assert_eq!(h.scan_progress.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_is_isolated() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_scan_started(&ScanStartedEvent {
        scope: "selection".into(),
        root_count: 1,
    });

    assert_eq!(counter.scan_started.load(Ordering::Relaxed), 1);
}
