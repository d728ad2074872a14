//! Bounded depth-first walk over the scan roots.
//!
//! Roots are handled in batches with a checkpoint before each batch and a
//! yield after it. Inside a batch every node visit is a checkpoint as well.
//! Nodes below `max_depth` are never entered and only the first
//! `max_children` children of a node are visited.

use designlint_core::events::types::{NodeFailedEvent, ScanProgressEvent};
use designlint_core::types::NodeId;

use super::scheduler::Interrupt;
use crate::aggregation::Insertion;
use crate::document::DocumentAccessor;
use crate::scanner::context::ScanContext;

pub struct Traverser;

impl Traverser {
    /// Visit every root in order. Stops at the first interrupt; whatever the
    /// aggregator holds at that point stays in the context.
    pub fn run<D: DocumentAccessor + ?Sized>(
        ctx: &mut ScanContext<'_, D>,
        roots: &[NodeId],
    ) -> Result<(), Interrupt> {
        let total = roots.len();
        let mut processed = 0;
        ctx.stats.roots = total;

        for batch in roots.chunks(ctx.limits.batch_size) {
            ctx.scheduler.checkpoint()?;
            for root in batch {
                visit(ctx, root, 0)?;
            }
            processed += batch.len();
            ctx.stats.batches += 1;
            ctx.events.emit_scan_progress(&ScanProgressEvent { processed, total });
            ctx.scheduler.yield_now();
        }
        Ok(())
    }
}

fn visit<D: DocumentAccessor + ?Sized>(
    ctx: &mut ScanContext<'_, D>,
    id: &NodeId,
    depth: u32,
) -> Result<(), Interrupt> {
    if depth > ctx.limits.max_depth {
        ctx.stats.depth_cutoffs += 1;
        tracing::debug!(node_id = %id, depth, "depth limit reached, not descending");
        return Ok(());
    }
    ctx.scheduler.checkpoint()?;

    let node = match ctx.doc.node(id) {
        Ok(node) => node,
        Err(e) => {
            node_failed(ctx, id, e.to_string());
            return Ok(());
        }
    };
    ctx.stats.nodes_visited += 1;

    let classified = {
        let view: &ScanContext<'_, D> = ctx;
        view.classifier.classify(view.doc, &node, view)
    };
    match classified {
        Ok(findings) => {
            for finding in findings {
                match ctx.aggregator.insert(finding) {
                    Insertion::Accepted => {}
                    Insertion::Replaced { evicted } => ctx.stats.findings_superseded += evicted,
                    Insertion::Rejected => ctx.stats.findings_superseded += 1,
                }
            }
        }
        Err(e) => node_failed(ctx, id, e.to_string()),
    }

    let limit = ctx.limits.max_children;
    if node.children.len() > limit {
        let skipped = node.children.len() - limit;
        ctx.stats.children_truncated += skipped;
        tracing::debug!(node_id = %id, skipped, "child limit reached");
    }
    for child in node.children.iter().take(limit) {
        visit(ctx, child, depth + 1)?;
    }
    Ok(())
}

fn node_failed<D: DocumentAccessor + ?Sized>(
    ctx: &mut ScanContext<'_, D>,
    id: &NodeId,
    message: String,
) {
    ctx.stats.nodes_failed += 1;
    tracing::warn!(node_id = %id, error = %message, "skipping node");
    ctx.events.emit_node_failed(&NodeFailedEvent {
        node_id: id.clone(),
        message,
    });
}
