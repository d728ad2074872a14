//! Configuration system for designlint.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod catalog_config;
pub mod designlint_config;
pub mod matching_config;
pub mod scan_config;

pub use catalog_config::CatalogConfig;
pub use designlint_config::{ConfigOverrides, DesignLintConfig};
pub use matching_config::MatchingConfig;
pub use scan_config::{ScanConfig, TimeoutPolicy};
