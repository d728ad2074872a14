//! Scan orchestration: scope resolution, timeout policy and result assembly.

pub mod context;
pub mod scanner;
pub mod scope;

pub use context::{ScanContext, ScanStats, TraversalLimits};
pub use scanner::{ScanReport, Scanner};
pub use scope::ScanScope;
