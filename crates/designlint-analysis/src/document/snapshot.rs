//! Nested JSON snapshot format a host can hand over in one message.

use designlint_core::types::NodeId;
use serde::{Deserialize, Serialize};

use super::node::{
    BoundVariables, ComponentRef, Effect, NodeData, NodeKind, Paint, TextProperties,
};
use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};

/// A whole document: page trees plus every style/variable the host can resolve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentSnapshot {
    pub pages: Vec<SnapshotNode>,
    /// Styles known to the host. Non-remote entries are treated as local definitions.
    pub text_styles: Vec<TextStyleDescriptor>,
    /// Variables known to the host. `isLocal` entries are treated as local definitions.
    pub color_variables: Vec<ColorVariableDescriptor>,
    pub selection: Vec<NodeId>,
    pub current_page: Option<NodeId>,
}

/// A node with its children inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub bound_variables: BoundVariables,
    #[serde(default)]
    pub text: Option<TextProperties>,
    #[serde(default)]
    pub main_component: Option<ComponentRef>,
    #[serde(default)]
    pub children: Vec<SnapshotNode>,
}

impl SnapshotNode {
    /// Split into the node itself (without children) and its child subtrees.
    ///
    /// A TEXT node sent without a `text` block gets empty, unstyled properties.
    pub(crate) fn into_parts(self) -> (NodeData, Vec<SnapshotNode>) {
        let text = match (self.kind, self.text) {
            (NodeKind::Text, None) => Some(TextProperties::default()),
            (_, text) => text,
        };
        let node = NodeData {
            id: self.id,
            kind: self.kind,
            name: self.name,
            parent: None,
            children: Vec::new(),
            fills: self.fills,
            strokes: self.strokes,
            effects: self.effects,
            bound_variables: self.bound_variables,
            text,
            main_component: self.main_component,
        };
        (node, self.children)
    }
}
