//! Identifier newtypes and collection re-exports.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet};
pub use identifiers::{NodeId, StyleId, VariableId};
