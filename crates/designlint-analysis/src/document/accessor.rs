//! Capabilities the host document grants the engine.

use designlint_core::errors::DocumentError;
use designlint_core::types::{NodeId, StyleId, VariableId};

use super::node::{NodeData, SlotPath};
use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};

/// Read-only view of the host document.
///
/// Scanning and catalog discovery only ever hold a `&dyn DocumentAccessor`
/// (or a generic `&D`), which is what keeps them from mutating anything.
pub trait DocumentAccessor {
    /// Every page of the document, in document order.
    fn root_pages(&self) -> Result<Vec<NodeId>, DocumentError>;

    /// The page the user is looking at.
    fn current_page(&self) -> Result<NodeId, DocumentError>;

    /// Currently selected nodes, in selection order.
    fn selection(&self) -> Result<Vec<NodeId>, DocumentError>;

    /// Snapshot of a single node.
    fn node(&self, id: &NodeId) -> Result<NodeData, DocumentError>;

    /// Text styles defined in this document.
    fn local_text_styles(&self) -> Result<Vec<TextStyleDescriptor>, DocumentError>;

    /// Ids of color variables defined in this document.
    fn local_color_variable_ids(&self) -> Result<Vec<VariableId>, DocumentError>;

    /// Resolve any style id, local or library. `Ok(None)` when unknown.
    fn resolve_style_by_id(&self, id: &StyleId)
        -> Result<Option<TextStyleDescriptor>, DocumentError>;

    /// Resolve a variable to a concrete color. `Ok(None)` when unknown or not a color.
    fn resolve_variable_by_id(
        &self,
        id: &VariableId,
    ) -> Result<Option<ColorVariableDescriptor>, DocumentError>;
}

/// The only document-mutating operations, invoked in direct response to an
/// explicit user command.
pub trait DocumentMutator {
    fn apply_text_style(&mut self, node: &NodeId, style: &StyleId) -> Result<(), DocumentError>;

    fn apply_color_variable(
        &mut self,
        node: &NodeId,
        variable: &VariableId,
        slot: SlotPath,
    ) -> Result<(), DocumentError>;

    /// Select the node and bring it into view.
    fn select_node(&mut self, node: &NodeId) -> Result<(), DocumentError>;
}
