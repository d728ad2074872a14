//! In-memory document: the reference host used by tests, benches and
//! embedders that receive a JSON snapshot.

use designlint_core::errors::DocumentError;
use designlint_core::types::{FxHashMap, FxHashSet, NodeId, StyleId, VariableId};

use super::accessor::{DocumentAccessor, DocumentMutator};
use super::node::{FontName, NodeData, NodeKind, Paint, PaintProperty, SlotPath, TextStyleRef};
use super::snapshot::{DocumentSnapshot, SnapshotNode};
use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};

#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    nodes: FxHashMap<NodeId, NodeData>,
    pages: Vec<NodeId>,
    current_page: Option<NodeId>,
    selection: Vec<NodeId>,
    styles: FxHashMap<StyleId, TextStyleDescriptor>,
    local_styles: Vec<StyleId>,
    variables: FxHashMap<VariableId, ColorVariableDescriptor>,
    local_variables: Vec<VariableId>,
    unreadable_nodes: FxHashSet<NodeId>,
    unreadable_styles: FxHashSet<StyleId>,
    selected: Option<NodeId>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page. The first page added becomes the current page.
    pub fn add_page(&mut self, id: impl Into<NodeId>, name: impl Into<String>) -> NodeId {
        let page = NodeData::new(id, NodeKind::Page, name);
        let id = page.id.clone();
        if self.current_page.is_none() {
            self.current_page = Some(id.clone());
        }
        self.pages.push(id.clone());
        self.nodes.insert(id.clone(), page);
        id
    }

    /// Append `node` as the last child of `parent`. Node ids are unique.
    pub fn append(
        &mut self,
        parent: &NodeId,
        mut node: NodeData,
    ) -> Result<NodeId, DocumentError> {
        if self.nodes.contains_key(&node.id) {
            return Err(DocumentError::DuplicateNode(node.id));
        }
        let parent_node = self
            .nodes
            .get_mut(parent)
            .ok_or_else(|| DocumentError::NodeNotFound(parent.clone()))?;
        let id = node.id.clone();
        parent_node.children.push(id.clone());
        node.parent = Some(parent.clone());
        node.children.clear();
        self.nodes.insert(id.clone(), node);
        Ok(id)
    }

    /// Register a text style. Non-remote styles are also listed as local definitions.
    pub fn add_text_style(&mut self, style: TextStyleDescriptor) {
        if !style.remote && !self.local_styles.contains(&style.id) {
            self.local_styles.push(style.id.clone());
        }
        self.styles.insert(style.id.clone(), style);
    }

    /// Register a color variable. `is_local` variables are also listed as local definitions.
    pub fn add_color_variable(&mut self, variable: ColorVariableDescriptor) {
        if variable.is_local && !self.local_variables.contains(&variable.id) {
            self.local_variables.push(variable.id.clone());
        }
        self.variables.insert(variable.id.clone(), variable);
    }

    pub fn set_selection(&mut self, selection: Vec<NodeId>) {
        self.selection = selection;
    }

    pub fn set_current_page(&mut self, page: NodeId) {
        self.current_page = Some(page);
    }

    /// Make reads of this node fail, as a host would for a node it cannot serialize.
    pub fn mark_node_unreadable(&mut self, id: NodeId) {
        self.unreadable_nodes.insert(id);
    }

    /// Make resolution of this style fail.
    pub fn mark_style_unreadable(&mut self, id: StyleId) {
        self.unreadable_styles.insert(id);
    }

    /// Node last brought into view via `select_node`.
    pub fn selected_node(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn from_snapshot(snapshot: DocumentSnapshot) -> Result<Self, DocumentError> {
        let mut doc = Self::new();
        for style in snapshot.text_styles {
            doc.add_text_style(style);
        }
        for variable in snapshot.color_variables {
            doc.add_color_variable(variable);
        }
        for page in snapshot.pages {
            let (page_node, children) = page.into_parts();
            if doc.nodes.contains_key(&page_node.id) {
                return Err(DocumentError::DuplicateNode(page_node.id));
            }
            let page_id = doc.add_page(page_node.id, page_node.name);
            doc.append_subtrees(&page_id, children)?;
        }
        doc.selection = snapshot.selection;
        if snapshot.current_page.is_some() {
            doc.current_page = snapshot.current_page;
        }
        Ok(doc)
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let snapshot: DocumentSnapshot = serde_json::from_str(json)
            .map_err(|e| DocumentError::Host(format!("invalid document snapshot: {e}")))?;
        Self::from_snapshot(snapshot)
    }

    fn append_subtrees(
        &mut self,
        parent: &NodeId,
        subtrees: Vec<SnapshotNode>,
    ) -> Result<(), DocumentError> {
        // Explicit stack: snapshots may nest deeper than the native stack allows.
        let mut stack: Vec<(NodeId, SnapshotNode)> = subtrees
            .into_iter()
            .rev()
            .map(|n| (parent.clone(), n))
            .collect();
        while let Some((parent_id, subtree)) = stack.pop() {
            let (node, children) = subtree.into_parts();
            let id = self.append(&parent_id, node)?;
            stack.extend(children.into_iter().rev().map(|c| (id.clone(), c)));
        }
        Ok(())
    }

    fn node_mut(&mut self, id: &NodeId) -> Result<&mut NodeData, DocumentError> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| DocumentError::NodeNotFound(id.clone()))
    }
}

impl DocumentAccessor for InMemoryDocument {
    fn root_pages(&self) -> Result<Vec<NodeId>, DocumentError> {
        Ok(self.pages.clone())
    }

    fn current_page(&self) -> Result<NodeId, DocumentError> {
        self.current_page
            .clone()
            .ok_or_else(|| DocumentError::Host("document has no pages".to_string()))
    }

    fn selection(&self) -> Result<Vec<NodeId>, DocumentError> {
        Ok(self.selection.clone())
    }

    fn node(&self, id: &NodeId) -> Result<NodeData, DocumentError> {
        if self.unreadable_nodes.contains(id) {
            return Err(DocumentError::Host(format!("node {id} could not be read")));
        }
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| DocumentError::NodeNotFound(id.clone()))
    }

    fn local_text_styles(&self) -> Result<Vec<TextStyleDescriptor>, DocumentError> {
        Ok(self
            .local_styles
            .iter()
            .filter_map(|id| self.styles.get(id).cloned())
            .collect())
    }

    fn local_color_variable_ids(&self) -> Result<Vec<VariableId>, DocumentError> {
        Ok(self.local_variables.clone())
    }

    fn resolve_style_by_id(
        &self,
        id: &StyleId,
    ) -> Result<Option<TextStyleDescriptor>, DocumentError> {
        if self.unreadable_styles.contains(id) {
            return Err(DocumentError::StyleUnreadable {
                id: id.clone(),
                message: "style could not be loaded".to_string(),
            });
        }
        Ok(self.styles.get(id).cloned())
    }

    fn resolve_variable_by_id(
        &self,
        id: &VariableId,
    ) -> Result<Option<ColorVariableDescriptor>, DocumentError> {
        Ok(self.variables.get(id).cloned())
    }
}

impl DocumentMutator for InMemoryDocument {
    fn apply_text_style(&mut self, node: &NodeId, style: &StyleId) -> Result<(), DocumentError> {
        let descriptor = self
            .styles
            .get(style)
            .cloned()
            .ok_or_else(|| DocumentError::Host(format!("unknown text style {style}")))?;
        let target = self.node_mut(node)?;
        let text = target
            .text
            .as_mut()
            .ok_or_else(|| DocumentError::Host(format!("node {node} has no text")))?;
        text.style = TextStyleRef::Id(style.clone());
        text.font_name = Some(FontName::new(
            descriptor.font_family,
            descriptor.font_style,
        ));
        text.font_size = Some(descriptor.font_size);
        text.line_height = descriptor.line_height.or(text.line_height);
        text.letter_spacing = descriptor.letter_spacing.or(text.letter_spacing);
        Ok(())
    }

    fn apply_color_variable(
        &mut self,
        node: &NodeId,
        variable: &VariableId,
        slot: SlotPath,
    ) -> Result<(), DocumentError> {
        let color = self
            .variables
            .get(variable)
            .map(|v| v.resolved_color)
            .ok_or_else(|| DocumentError::Host(format!("unknown variable {variable}")))?;
        let target = self.node_mut(node)?;
        let slot_exists = match slot.property {
            PaintProperty::Fills => target.fills.len() > slot.index,
            PaintProperty::Strokes => target.strokes.len() > slot.index,
            PaintProperty::Effects => target.effects.len() > slot.index,
        };
        if !slot_exists {
            return Err(DocumentError::Host(format!("node {node} has no slot {slot}")));
        }
        let paint = match slot.property {
            PaintProperty::Fills => target.fills.get_mut(slot.index),
            PaintProperty::Strokes => target.strokes.get_mut(slot.index),
            PaintProperty::Effects => None,
        };
        if let Some(Paint::Solid { color: current, .. }) = paint {
            *current = color;
        }
        target.bound_variables.bind(slot, variable.clone());
        Ok(())
    }

    fn select_node(&mut self, node: &NodeId) -> Result<(), DocumentError> {
        if !self.nodes.contains_key(node) {
            return Err(DocumentError::NodeNotFound(node.clone()));
        }
        self.selected = Some(node.clone());
        Ok(())
    }
}
