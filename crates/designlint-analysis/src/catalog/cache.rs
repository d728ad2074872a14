//! Time-bounded cache of the two catalogs.
//!
//! Uses `moka::sync::Cache` with a fixed TTL. A snapshot is rebuilt on the
//! first read after expiry or after `reset()`. Discovery failures never reach
//! the caller: the snapshot degrades to local definitions and that degraded
//! snapshot is cached like any other until the next reset or expiry.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use designlint_core::config::CatalogConfig;
use designlint_core::errors::{CatalogError, CatalogKind};
use designlint_core::events::types::{CatalogFallbackEvent, CatalogRefreshedEvent};
use designlint_core::events::EventDispatcher;
use designlint_core::traits::Cancellable;
use moka::sync::Cache;

use super::discovery::{self, DiscoveryBudget};
use super::types::{sort_catalog, CatalogEntry, ColorVariableDescriptor, TextStyleDescriptor};
use crate::document::DocumentAccessor;

#[derive(Debug, Clone)]
enum CatalogSnapshot {
    TextStyles(Arc<Vec<TextStyleDescriptor>>),
    ColorVariables(Arc<Vec<ColorVariableDescriptor>>),
}

/// Cached text styles and color variables for one document.
pub struct CatalogCache {
    snapshots: Cache<CatalogKind, CatalogSnapshot>,
    config: CatalogConfig,
    events: EventDispatcher,
    hits: AtomicU64,
    misses: AtomicU64,
    text_fallback: AtomicBool,
    color_fallback: AtomicBool,
}

impl CatalogCache {
    pub fn new(config: CatalogConfig) -> Self {
        let snapshots = Cache::builder()
            .max_capacity(2)
            .time_to_live(config.effective_ttl())
            .build();
        Self {
            snapshots,
            config,
            events: EventDispatcher::new(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            text_fallback: AtomicBool::new(false),
            color_fallback: AtomicBool::new(false),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.events = events;
        self
    }

    /// Available text styles, local before remote, then by name.
    pub fn text_styles<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
        cancel: &dyn Cancellable,
    ) -> Arc<Vec<TextStyleDescriptor>> {
        if let Some(CatalogSnapshot::TextStyles(styles)) =
            self.snapshots.get(&CatalogKind::TextStyles)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return styles;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let kind = CatalogKind::TextStyles;
        let budget =
            DiscoveryBudget::new(kind, self.config.effective_text_style_timeout(), cancel);
        let discovered = discovery::discover_text_styles(
            doc,
            &budget,
            self.config.effective_max_library_instances(),
        );
        let styles = self.settle(kind, discovered, &budget, &self.text_fallback, || {
            discovery::local_text_styles(doc)
        });
        let styles = Arc::new(styles);
        self.snapshots
            .insert(kind, CatalogSnapshot::TextStyles(Arc::clone(&styles)));
        styles
    }

    /// Available color variables, local before remote, then by name.
    pub fn color_variables<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
        cancel: &dyn Cancellable,
    ) -> Arc<Vec<ColorVariableDescriptor>> {
        if let Some(CatalogSnapshot::ColorVariables(variables)) =
            self.snapshots.get(&CatalogKind::ColorVariables)
        {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return variables;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let kind = CatalogKind::ColorVariables;
        let budget =
            DiscoveryBudget::new(kind, self.config.effective_color_variable_timeout(), cancel);
        let discovered = discovery::discover_color_variables(
            doc,
            &budget,
            self.config.effective_max_library_instances(),
        );
        let variables = self.settle(kind, discovered, &budget, &self.color_fallback, || {
            discovery::local_color_variables(doc)
        });
        let variables = Arc::new(variables);
        self.snapshots.insert(
            kind,
            CatalogSnapshot::ColorVariables(Arc::clone(&variables)),
        );
        variables
    }

    /// Turn a discovery outcome into a sorted snapshot, falling back to local
    /// definitions on any error.
    fn settle<E, F>(
        &self,
        kind: CatalogKind,
        discovered: Result<Vec<E>, CatalogError>,
        budget: &DiscoveryBudget<'_>,
        fallback_flag: &AtomicBool,
        local_only: F,
    ) -> Vec<E>
    where
        E: CatalogEntry,
        F: FnOnce() -> Vec<E>,
    {
        let mut entries = match discovered {
            Ok(entries) => {
                fallback_flag.store(false, Ordering::Relaxed);
                entries
            }
            Err(e) => {
                tracing::warn!(
                    catalog = %kind,
                    error = %e,
                    "discovery failed, using local definitions"
                );
                fallback_flag.store(true, Ordering::Relaxed);
                self.events.emit_catalog_fallback(&CatalogFallbackEvent {
                    catalog: kind,
                    reason: e.to_string(),
                });
                local_only()
            }
        };
        sort_catalog(&mut entries);

        let remote = entries.iter().filter(|e| e.is_remote()).count();
        let duration_ms = budget.elapsed().as_millis() as u64;
        tracing::debug!(
            catalog = %kind,
            catalog_size = entries.len(),
            discovery_duration = duration_ms,
            "catalog refreshed"
        );
        self.events.emit_catalog_refreshed(&CatalogRefreshedEvent {
            catalog: kind,
            local: entries.len() - remote,
            remote,
            duration_ms,
        });
        entries
    }

    /// Drop both snapshots; the next read rediscovers.
    pub fn reset(&self) {
        self.snapshots.invalidate_all();
    }

    /// Whether the most recent discovery of `kind` fell back to local definitions.
    pub fn used_fallback(&self, kind: CatalogKind) -> bool {
        match kind {
            CatalogKind::TextStyles => self.text_fallback.load(Ordering::Relaxed),
            CatalogKind::ColorVariables => self.color_fallback.load(Ordering::Relaxed),
        }
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0–1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let total = h + self.misses() as f64;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

impl std::fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogCache")
            .field("hits", &self.hits())
            .field("misses", &self.misses())
            .finish()
    }
}
