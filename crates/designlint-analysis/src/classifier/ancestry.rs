//! Upward walks through the lookup-only parent relation.

use designlint_core::constants::MAX_PATH_LENGTH;
use designlint_core::errors::DocumentError;

use crate::document::{DocumentAccessor, NodeData, NodeKind};

/// Whether one of the nearest `limit` ancestors is a component or an instance.
/// Stops early at the owning page.
pub fn inside_component<D: DocumentAccessor + ?Sized>(
    doc: &D,
    node: &NodeData,
    limit: usize,
) -> Result<bool, DocumentError> {
    let mut next = node.parent.clone();
    for _ in 0..limit {
        let Some(id) = next else {
            return Ok(false);
        };
        let ancestor = doc.node(&id)?;
        if ancestor.kind.is_component_boundary() {
            return Ok(true);
        }
        if ancestor.kind.is_container_root() {
            return Ok(false);
        }
        next = ancestor.parent;
    }
    Ok(false)
}

/// Names from the owning page down to `node` itself. The document root is
/// never part of a path.
pub fn node_path<D: DocumentAccessor + ?Sized>(
    doc: &D,
    node: &NodeData,
) -> Result<Vec<String>, DocumentError> {
    let mut names = vec![node.name.clone()];
    if node.kind.is_container_root() {
        return Ok(names);
    }
    let mut next = node.parent.clone();
    while let Some(id) = next {
        if names.len() >= MAX_PATH_LENGTH {
            break;
        }
        let ancestor = doc.node(&id)?;
        match ancestor.kind {
            NodeKind::Root => break,
            NodeKind::Page => {
                names.push(ancestor.name);
                break;
            }
            _ => {
                names.push(ancestor.name);
                next = ancestor.parent;
            }
        }
    }
    names.reverse();
    Ok(names)
}
