//! One scan request, end to end.

use std::sync::Arc;
use std::time::Instant;

use designlint_core::config::{DesignLintConfig, TimeoutPolicy};
use designlint_core::errors::{ErrorCode, ScanError};
use designlint_core::events::types::{ScanCompleteEvent, ScanErrorEvent, ScanStartedEvent};
use designlint_core::events::EventDispatcher;
use designlint_core::traits::CancellationToken;
use designlint_core::types::NodeId;
use serde::{Deserialize, Serialize};

use super::context::{ScanContext, ScanStats, TraversalLimits};
use super::scope::ScanScope;
use crate::catalog::CatalogCache;
use crate::classifier::Classifier;
use crate::document::DocumentAccessor;
use crate::findings::ScanResult;
use crate::traversal::{Deadline, Interrupt, Scheduler, ThreadYielder, Traverser, Yielder};

/// A result plus how it was obtained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub result: ScanResult,
    pub stats: ScanStats,
}

/// Detection engine entry point.
///
/// Owns the catalog cache, the only state that survives between scans.
/// Scans are single-flight: callers serialize them.
pub struct Scanner {
    config: DesignLintConfig,
    catalog: CatalogCache,
    classifier: Classifier,
    events: EventDispatcher,
    cancel: CancellationToken,
    yielder: Arc<dyn Yielder>,
}

impl Scanner {
    pub fn new(config: DesignLintConfig) -> Self {
        let catalog = CatalogCache::new(config.catalog.clone());
        let classifier = Classifier::from_config(&config.matching);
        Self {
            config,
            catalog,
            classifier,
            events: EventDispatcher::new(),
            cancel: CancellationToken::new(),
            yielder: Arc::new(ThreadYielder),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.catalog = CatalogCache::new(self.config.catalog.clone()).with_events(events.clone());
        self.events = events;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn with_yielder(mut self, yielder: Arc<dyn Yielder>) -> Self {
        self.yielder = yielder;
        self
    }

    pub fn config(&self) -> &DesignLintConfig {
        &self.config
    }

    pub fn catalog(&self) -> &CatalogCache {
        &self.catalog
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Resolve `scope` against the document and scan it.
    pub fn scan_scope<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
        scope: ScanScope,
    ) -> Result<ScanReport, ScanError> {
        let roots = scope.resolve(doc).map_err(|e| {
            let err = ScanError::from(e);
            self.report_error(&err);
            err
        })?;
        self.run(doc, &roots, scope.name())
    }

    /// Scan the subtrees under `roots`. An empty slice yields an empty-scope result.
    pub fn scan<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
        roots: &[NodeId],
    ) -> Result<ScanReport, ScanError> {
        self.run(doc, roots, "nodes")
    }

    fn run<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
        roots: &[NodeId],
        scope: &str,
    ) -> Result<ScanReport, ScanError> {
        let started = Instant::now();
        let span = tracing::info_span!("scan", scope, roots = roots.len());
        let _guard = span.enter();

        // Every scan sees freshly connected libraries.
        self.catalog.reset();

        if roots.is_empty() {
            tracing::debug!("nothing in scope");
            return Ok(ScanReport {
                result: ScanResult::empty_scope(),
                stats: ScanStats::default(),
            });
        }

        self.events.emit_scan_started(&ScanStartedEvent {
            scope: scope.to_string(),
            root_count: roots.len(),
        });

        let deadline = Deadline::after(self.config.scan.effective_timeout());
        let scheduler = Scheduler::new(deadline, &self.cancel, self.yielder.as_ref());
        let mut ctx = ScanContext::new(
            doc,
            &self.catalog,
            self.classifier,
            TraversalLimits::from_config(&self.config.scan),
            scheduler,
            &self.events,
        );
        let outcome = Traverser::run(&mut ctx, roots);
        let (aggregator, mut stats) = ctx.into_parts();
        stats.duration = started.elapsed();

        let timed_out = match outcome {
            Ok(()) => false,
            Err(Interrupt::Cancelled) => {
                tracing::info!(nodes_visited = stats.nodes_visited, "scan cancelled");
                let err = ScanError::Cancelled;
                self.report_error(&err);
                return Err(err);
            }
            Err(Interrupt::Timeout) => {
                let timeout = self.config.scan.effective_timeout();
                tracing::warn!(
                    nodes_visited = stats.nodes_visited,
                    findings = aggregator.len(),
                    timeout_ms = timeout.as_millis() as u64,
                    "scan timed out"
                );
                match self.config.scan.effective_timeout_policy() {
                    TimeoutPolicy::Discard => {
                        let err = ScanError::Timeout {
                            elapsed_ms: stats.duration.as_millis() as u64,
                            timeout_ms: timeout.as_millis() as u64,
                        };
                        self.report_error(&err);
                        return Err(err);
                    }
                    TimeoutPolicy::Partial => true,
                }
            }
        };

        let summary = aggregator.summary();
        let text_styles = if summary.text > 0 {
            self.catalog.text_styles(doc, &self.cancel)
        } else {
            Arc::default()
        };
        let color_variables = if summary.color > 0 {
            self.catalog.color_variables(doc, &self.cancel)
        } else {
            Arc::default()
        };
        let result = aggregator.finish(&text_styles, &color_variables, timed_out);

        tracing::info!(
            text = result.summary.text,
            color = result.summary.color,
            layer = result.summary.layer,
            nodes_visited = stats.nodes_visited,
            nodes_failed = stats.nodes_failed,
            scan_duration = stats.duration.as_millis() as u64,
            "scan complete"
        );
        self.events.emit_scan_complete(&ScanCompleteEvent {
            text: result.summary.text,
            color: result.summary.color,
            layer: result.summary.layer,
            nodes_visited: stats.nodes_visited,
            duration_ms: stats.duration.as_millis() as u64,
            timed_out,
        });

        Ok(ScanReport { result, stats })
    }

    fn report_error(&self, err: &ScanError) {
        self.events.emit_scan_error(&ScanErrorEvent {
            code: err.error_code(),
            message: err.to_string(),
        });
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(DesignLintConfig::default())
    }
}
