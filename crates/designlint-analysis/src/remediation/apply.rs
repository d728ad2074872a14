//! Validating and applying text style and color variable fixes.

use designlint_core::errors::{ApplyError, DocumentError};
use designlint_core::events::types::{FixAppliedEvent, FixFailedEvent};
use designlint_core::events::EventDispatcher;
use designlint_core::types::{NodeId, StyleId, VariableId};

use crate::catalog::CatalogCache;
use crate::document::{
    DocumentAccessor, DocumentMutator, NodeData, NodeKind, PaintProperty, SlotPath,
};
use crate::findings::Finding;
use crate::scanner::Scanner;

/// Validates and applies fixes, then invalidates the catalog so the next read
/// reflects the change.
pub struct Remediator<'a> {
    catalog: &'a CatalogCache,
    events: &'a EventDispatcher,
}

impl<'a> Remediator<'a> {
    pub fn new(catalog: &'a CatalogCache, events: &'a EventDispatcher) -> Self {
        Self { catalog, events }
    }

    pub fn for_scanner(scanner: &'a Scanner) -> Self {
        Self::new(scanner.catalog(), scanner.events())
    }

    pub fn apply_text_style<D>(
        &self,
        doc: &mut D,
        node_id: &NodeId,
        style_id: &StyleId,
    ) -> Result<(), ApplyError>
    where
        D: DocumentAccessor + DocumentMutator + ?Sized,
    {
        let outcome = apply_text_style(doc, node_id, style_id);
        self.settle(node_id, style_id.as_str(), outcome)
    }

    /// `property_path` names the slot, e.g. `fills/0`.
    pub fn apply_color_variable<D>(
        &self,
        doc: &mut D,
        node_id: &NodeId,
        variable_id: &VariableId,
        property_path: &str,
    ) -> Result<(), ApplyError>
    where
        D: DocumentAccessor + DocumentMutator + ?Sized,
    {
        let outcome = property_path
            .parse::<SlotPath>()
            .map_err(|_| ApplyError::InvalidSlot {
                node_id: node_id.clone(),
                path: property_path.to_string(),
            })
            .and_then(|slot| apply_color_variable(doc, node_id, variable_id, slot));
        self.settle(node_id, variable_id.as_str(), outcome)
    }

    /// Apply the best candidate of a finding.
    pub fn apply_fix<D>(&self, doc: &mut D, finding: &Finding) -> Result<(), ApplyError>
    where
        D: DocumentAccessor + DocumentMutator + ?Sized,
    {
        match finding {
            Finding::Text(f) => {
                let candidate = f
                    .suggested()
                    .ok_or_else(|| ApplyError::NoSuggestion(f.node_id.clone()))?;
                self.apply_text_style(doc, &f.node_id, &candidate.descriptor.id)
            }
            Finding::Color(f) => {
                let candidate = f
                    .suggested()
                    .ok_or_else(|| ApplyError::NoSuggestion(f.node_id.clone()))?;
                let outcome =
                    apply_color_variable(doc, &f.node_id, &candidate.descriptor.id, f.slot);
                self.settle(&f.node_id, candidate.descriptor.id.as_str(), outcome)
            }
            Finding::Layer(f) => Err(ApplyError::NoSuggestion(f.node_id.clone())),
        }
    }

    fn settle(
        &self,
        node_id: &NodeId,
        target_id: &str,
        outcome: Result<(), ApplyError>,
    ) -> Result<(), ApplyError> {
        match &outcome {
            Ok(()) => {
                self.catalog.reset();
                tracing::info!(node_id = %node_id, target = target_id, "fix applied");
                self.events.emit_fix_applied(&FixAppliedEvent {
                    node_id: node_id.clone(),
                    target_id: target_id.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!(node_id = %node_id, target = target_id, error = %e, "fix failed");
                self.events.emit_fix_failed(&FixFailedEvent {
                    node_id: node_id.clone(),
                    message: e.to_string(),
                });
            }
        }
        outcome
    }
}

fn apply_text_style<D>(
    doc: &mut D,
    node_id: &NodeId,
    style_id: &StyleId,
) -> Result<(), ApplyError>
where
    D: DocumentAccessor + DocumentMutator + ?Sized,
{
    let node = read_target(doc, node_id)?;
    if node.kind != NodeKind::Text || node.text.is_none() {
        return Err(ApplyError::UnsupportedNode {
            node_id: node_id.clone(),
            operation: "text styles",
        });
    }
    if doc.resolve_style_by_id(style_id)?.is_none() {
        return Err(ApplyError::StyleNotFound(style_id.clone()));
    }
    doc.apply_text_style(node_id, style_id)
        .map_err(|e| ApplyError::Rejected(e.to_string()))
}

fn apply_color_variable<D>(
    doc: &mut D,
    node_id: &NodeId,
    variable_id: &VariableId,
    slot: SlotPath,
) -> Result<(), ApplyError>
where
    D: DocumentAccessor + DocumentMutator + ?Sized,
{
    let node = read_target(doc, node_id)?;
    if !node.kind.can_have_paint() {
        return Err(ApplyError::UnsupportedNode {
            node_id: node_id.clone(),
            operation: "color variables",
        });
    }
    let slots = match slot.property {
        PaintProperty::Fills => node.fills.len(),
        PaintProperty::Strokes => node.strokes.len(),
        PaintProperty::Effects => node.effects.len(),
    };
    if slot.index >= slots {
        return Err(ApplyError::InvalidSlot {
            node_id: node_id.clone(),
            path: slot.to_string(),
        });
    }
    if doc.resolve_variable_by_id(variable_id)?.is_none() {
        return Err(ApplyError::VariableNotFound(variable_id.clone()));
    }
    doc.apply_color_variable(node_id, variable_id, slot)
        .map_err(|e| ApplyError::Rejected(e.to_string()))
}

fn read_target<D: DocumentAccessor + ?Sized>(
    doc: &D,
    node_id: &NodeId,
) -> Result<NodeData, ApplyError> {
    doc.node(node_id).map_err(|e| match e {
        DocumentError::NodeNotFound(id) => ApplyError::NodeNotFound(id),
        other => ApplyError::Document(other),
    })
}
