//! Catalog of reusable text styles and color variables.

pub mod cache;
pub mod discovery;
pub mod types;

pub use cache::CatalogCache;
pub use types::{ColorVariableDescriptor, TextStyleDescriptor};
