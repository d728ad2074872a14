//! designlint-analysis: detection-and-matching engine.
//!
//! Walks a host design document read-only, reports text without a style,
//! colors not bound to a variable, and layers that could be components, and
//! ranks the styles/variables that would fix each finding.

pub mod aggregation;
pub mod catalog;
pub mod classifier;
pub mod document;
pub mod findings;
pub mod matcher;
pub mod protocol;
pub mod remediation;
pub mod scanner;
pub mod traversal;

pub use scanner::{ScanReport, ScanScope, Scanner};
