//! Per-scan state, constructed fresh for every scan and passed by reference
//! through traversal and classification.

use std::sync::Arc;
use std::time::Duration;

use designlint_core::config::ScanConfig;
use designlint_core::events::EventDispatcher;
use serde::{Deserialize, Serialize};

use crate::aggregation::ResultAggregator;
use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};
use crate::catalog::CatalogCache;
use crate::classifier::{CatalogSource, Classifier};
use crate::document::DocumentAccessor;
use crate::traversal::Scheduler;

/// Bookkeeping returned alongside every result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub roots: usize,
    pub nodes_visited: usize,
    /// Nodes skipped after a read or classification error.
    pub nodes_failed: usize,
    /// Subtrees not entered because they sit below the depth limit.
    pub depth_cutoffs: usize,
    /// Children left unvisited because a parent exceeded the breadth limit.
    pub children_truncated: usize,
    pub batches: usize,
    pub yields: usize,
    /// Findings dropped or evicted by category priority.
    pub findings_superseded: usize,
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// Depth, breadth and batching bounds for one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraversalLimits {
    pub max_depth: u32,
    pub max_children: usize,
    pub batch_size: usize,
}

impl TraversalLimits {
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            max_depth: config.effective_max_depth(),
            max_children: config.effective_max_children(),
            batch_size: config.effective_batch_size().max(1),
        }
    }
}

pub struct ScanContext<'a, D: DocumentAccessor + ?Sized> {
    pub(crate) doc: &'a D,
    pub(crate) catalog: &'a CatalogCache,
    pub(crate) classifier: Classifier,
    pub(crate) limits: TraversalLimits,
    pub(crate) aggregator: ResultAggregator,
    pub(crate) scheduler: Scheduler<'a>,
    pub(crate) events: &'a EventDispatcher,
    pub(crate) stats: ScanStats,
}

impl<'a, D: DocumentAccessor + ?Sized> ScanContext<'a, D> {
    pub fn new(
        doc: &'a D,
        catalog: &'a CatalogCache,
        classifier: Classifier,
        limits: TraversalLimits,
        scheduler: Scheduler<'a>,
        events: &'a EventDispatcher,
    ) -> Self {
        Self {
            doc,
            catalog,
            classifier,
            limits,
            aggregator: ResultAggregator::new(),
            scheduler,
            events,
            stats: ScanStats::default(),
        }
    }

    pub fn aggregator(&self) -> &ResultAggregator {
        &self.aggregator
    }

    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Consume the context, keeping what the scanner reports.
    pub fn into_parts(self) -> (ResultAggregator, ScanStats) {
        let mut stats = self.stats;
        stats.yields = self.scheduler.yields();
        (self.aggregator, stats)
    }
}

impl<D: DocumentAccessor + ?Sized> CatalogSource for ScanContext<'_, D> {
    fn text_styles(&self) -> Arc<Vec<TextStyleDescriptor>> {
        self.catalog
            .text_styles(self.doc, self.scheduler.cancellation())
    }

    fn color_variables(&self) -> Arc<Vec<ColorVariableDescriptor>> {
        self.catalog
            .color_variables(self.doc, self.scheduler.cancellation())
    }
}
