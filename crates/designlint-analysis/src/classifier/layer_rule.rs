//! Layers that look like they should have been components.

use designlint_core::errors::DocumentError;

use super::ancestry::inside_component;
use crate::document::{DocumentAccessor, NodeData, NodeKind};
use crate::findings::{FindingCategory, LayerFinding, LayerKind};

pub fn check<D: DocumentAccessor + ?Sized>(
    doc: &D,
    node: &NodeData,
    ancestor_scan_depth: usize,
) -> Result<Option<LayerFinding>, DocumentError> {
    let kind = match node.kind {
        NodeKind::Vector | NodeKind::BooleanOperation | NodeKind::Line => {
            if inside_component(doc, node, ancestor_scan_depth)? {
                return Ok(None);
            }
            LayerKind::CustomShape
        }
        NodeKind::Rectangle
        | NodeKind::Ellipse
        | NodeKind::Polygon
        | NodeKind::Star
        | NodeKind::Text
        | NodeKind::Frame => {
            if !could_be_component(node) || inside_component(doc, node, ancestor_scan_depth)? {
                return Ok(None);
            }
            if node.kind == NodeKind::Rectangle && node.has_image_fill() {
                LayerKind::Image
            } else {
                LayerKind::Primitive
            }
        }
        NodeKind::Group => {
            if inside_component(doc, node, ancestor_scan_depth)? || !wraps_components(doc, node)? {
                return Ok(None);
            }
            LayerKind::GroupWithComponents
        }
        NodeKind::Component | NodeKind::Instance | NodeKind::Page | NodeKind::Root => {
            return Ok(None)
        }
    };

    Ok(Some(LayerFinding {
        node_id: node.id.clone(),
        name: node.name.clone(),
        category: FindingCategory::Layer,
        path: Vec::new(),
        description: kind.describe().to_string(),
        kind,
        node_type: node.kind,
    }))
}

/// Cheap filter for primitives that carry enough structure or paint to be worth reusing.
pub fn could_be_component(node: &NodeData) -> bool {
    if node.has_children() || node.has_paint() {
        return true;
    }
    match node.kind {
        NodeKind::Rectangle | NodeKind::Frame | NodeKind::Group => true,
        NodeKind::Text => node
            .text
            .as_ref()
            .is_some_and(|t| !t.characters.trim().is_empty()),
        _ => false,
    }
}

/// Whether any direct child is an instance or a vector shape.
fn wraps_components<D: DocumentAccessor + ?Sized>(
    doc: &D,
    group: &NodeData,
) -> Result<bool, DocumentError> {
    for child in &group.children {
        let child = doc.node(child)?;
        if matches!(
            child.kind,
            NodeKind::Instance | NodeKind::Vector | NodeKind::BooleanOperation
        ) {
            return Ok(true);
        }
    }
    Ok(false)
}
