//! Catalog discovery: local definitions plus everything already referenced
//! somewhere in the document.
//!
//! The document walk enters local instances, whose overrides can reference
//! library styles. Library instance subtrees are deferred: the first
//! `max_library_instances` of them are walked in full afterwards, the rest are
//! skipped. Every step checks the discovery budget.

use std::time::Duration;

use designlint_core::errors::{CatalogError, CatalogKind};
use designlint_core::traits::Cancellable;
use designlint_core::types::{FxHashSet, NodeId, StyleId, VariableId};

use super::types::{ColorVariableDescriptor, TextStyleDescriptor};
use crate::document::{DocumentAccessor, NodeData};
use crate::traversal::Deadline;

/// Time and cancellation budget for one discovery run.
pub struct DiscoveryBudget<'a> {
    catalog: CatalogKind,
    deadline: Deadline,
    cancel: &'a dyn Cancellable,
}

impl<'a> DiscoveryBudget<'a> {
    pub fn new(catalog: CatalogKind, timeout: Duration, cancel: &'a dyn Cancellable) -> Self {
        Self {
            catalog,
            deadline: Deadline::after(timeout),
            cancel,
        }
    }

    /// One discovery step. Fails once the budget is spent or the run is cancelled.
    pub fn step(&self) -> Result<(), CatalogError> {
        if self.cancel.is_cancelled() {
            return Err(CatalogError::Cancelled {
                catalog: self.catalog,
            });
        }
        if self.deadline.is_expired() {
            return Err(CatalogError::DiscoveryTimeout {
                catalog: self.catalog,
                timeout_ms: self.deadline.budget().as_millis() as u64,
            });
        }
        Ok(())
    }

    pub fn elapsed(&self) -> Duration {
        self.deadline.elapsed()
    }
}

/// Discover text styles: local definitions, then styles referenced by text
/// nodes anywhere in the document, then styles inside library instances.
pub fn discover_text_styles<D: DocumentAccessor + ?Sized>(
    doc: &D,
    budget: &DiscoveryBudget<'_>,
    max_library_instances: usize,
) -> Result<Vec<TextStyleDescriptor>, CatalogError> {
    let catalog = CatalogKind::TextStyles;
    let mut seen: FxHashSet<StyleId> = FxHashSet::default();
    let mut styles = Vec::new();

    budget.step()?;
    for style in doc
        .local_text_styles()
        .map_err(|e| discovery_error(catalog, e))?
    {
        if seen.insert(style.id.clone()) {
            styles.push(style);
        }
    }

    walk_document(doc, budget, max_library_instances, |node| {
        let Some(text) = node.text.as_ref() else {
            return;
        };
        for id in text.style.referenced_ids() {
            if id.is_empty() || !seen.insert(id.clone()) {
                continue;
            }
            match doc.resolve_style_by_id(id) {
                Ok(Some(style)) => styles.push(style),
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(style_id = %id, error = %e, "skipping unreadable text style");
                }
            }
        }
    })?;

    Ok(styles)
}

/// Discover color variables: local definitions resolved to concrete colors,
/// then variables bound to fill/stroke slots anywhere in the document.
pub fn discover_color_variables<D: DocumentAccessor + ?Sized>(
    doc: &D,
    budget: &DiscoveryBudget<'_>,
    max_library_instances: usize,
) -> Result<Vec<ColorVariableDescriptor>, CatalogError> {
    let catalog = CatalogKind::ColorVariables;
    let mut seen: FxHashSet<VariableId> = FxHashSet::default();
    let mut variables = Vec::new();

    budget.step()?;
    let local_ids = doc
        .local_color_variable_ids()
        .map_err(|e| discovery_error(catalog, e))?;
    for id in local_ids {
        budget.step()?;
        if !seen.insert(id.clone()) {
            continue;
        }
        if let Some(variable) = resolve_variable(doc, &id) {
            variables.push(variable);
        }
    }

    walk_document(doc, budget, max_library_instances, |node| {
        for id in node.bound_variables.paint_bindings() {
            if !seen.insert(id.clone()) {
                continue;
            }
            if let Some(variable) = resolve_variable(doc, id) {
                variables.push(variable);
            }
        }
    })?;

    Ok(variables)
}

/// Local definitions only. Used when full discovery fails or runs out of time.
pub fn local_text_styles<D: DocumentAccessor + ?Sized>(doc: &D) -> Vec<TextStyleDescriptor> {
    doc.local_text_styles().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "local text styles unavailable");
        Vec::new()
    })
}

/// Local definitions only, resolved to colors.
pub fn local_color_variables<D: DocumentAccessor + ?Sized>(
    doc: &D,
) -> Vec<ColorVariableDescriptor> {
    match doc.local_color_variable_ids() {
        Ok(ids) => ids.iter().filter_map(|id| resolve_variable(doc, id)).collect(),
        Err(e) => {
            tracing::warn!(error = %e, "local color variables unavailable");
            Vec::new()
        }
    }
}

fn resolve_variable<D: DocumentAccessor + ?Sized>(
    doc: &D,
    id: &VariableId,
) -> Option<ColorVariableDescriptor> {
    match doc.resolve_variable_by_id(id) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(variable_id = %id, error = %e, "skipping unreadable variable");
            None
        }
    }
}

fn discovery_error(catalog: CatalogKind, e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Discovery {
        catalog,
        message: e.to_string(),
    }
}

/// Visit every node of every page in document order, without entering
/// library instances, then visit the subtrees of the first
/// `max_library_instances` library instances met along the way.
fn walk_document<D, F>(
    doc: &D,
    budget: &DiscoveryBudget<'_>,
    max_library_instances: usize,
    mut visit: F,
) -> Result<(), CatalogError>
where
    D: DocumentAccessor + ?Sized,
    F: FnMut(&NodeData),
{
    let pages = doc
        .root_pages()
        .map_err(|e| discovery_error(budget.catalog, e))?;
    let mut stack: Vec<NodeId> = pages.into_iter().rev().collect();
    let mut library_instances: Vec<NodeId> = Vec::new();
    let mut skipped_instances = 0usize;

    while let Some(id) = stack.pop() {
        budget.step()?;
        let Some(node) = read_node(doc, &id) else {
            continue;
        };
        visit(&node);
        if node.is_library_instance() {
            if library_instances.len() < max_library_instances {
                library_instances.push(node.id.clone());
            } else {
                skipped_instances += 1;
            }
        } else {
            stack.extend(node.children.iter().rev().cloned());
        }
    }

    if skipped_instances > 0 {
        tracing::debug!(
            catalog = %budget.catalog,
            inspected = library_instances.len(),
            skipped = skipped_instances,
            "library instance cap reached"
        );
    }

    for instance in library_instances {
        let Some(node) = read_node(doc, &instance) else {
            continue;
        };
        let mut stack: Vec<NodeId> = node.children.iter().rev().cloned().collect();
        while let Some(id) = stack.pop() {
            budget.step()?;
            let Some(child) = read_node(doc, &id) else {
                continue;
            };
            visit(&child);
            stack.extend(child.children.iter().rev().cloned());
        }
    }

    Ok(())
}

fn read_node<D: DocumentAccessor + ?Sized>(doc: &D, id: &NodeId) -> Option<NodeData> {
    match doc.node(id) {
        Ok(node) => Some(node),
        Err(e) => {
            tracing::debug!(node_id = %id, error = %e, "discovery skipped unreadable node");
            None
        }
    }
}
