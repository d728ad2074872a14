//! Cross-category deduplication and summary counts.

pub mod aggregator;

pub use aggregator::{Insertion, ResultAggregator};
