//! Host document boundary.
//!
//! The engine never owns nodes. It reads owned snapshots through
//! [`DocumentAccessor`] and mutates only through [`DocumentMutator`].

pub mod accessor;
pub mod memory;
pub mod node;
pub mod snapshot;

pub use accessor::{DocumentAccessor, DocumentMutator};
pub use memory::InMemoryDocument;
pub use node::{
    Blur, BoundVariables, ComponentRef, Effect, FontName, GradientKind, LetterSpacing, LineHeight,
    NodeData, NodeKind, Paint, PaintProperty, Rgb, Shadow, SlotPath, SpacingUnit,
    TextProperties, TextStyleRef,
};
pub use snapshot::{DocumentSnapshot, SnapshotNode};
