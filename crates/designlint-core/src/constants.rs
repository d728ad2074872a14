//! Shared constants for the designlint engine.

/// designlint version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Traversal bounds ----

/// Descent stops once a node is deeper than this.
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// Only the first N children of a node are visited.
pub const DEFAULT_MAX_CHILDREN: usize = 100;

/// Top-level scan roots processed between two yield points.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Whole-scan budget in milliseconds.
pub const DEFAULT_SCAN_TIMEOUT_MS: u64 = 60_000;

// ---- Catalog ----

/// Catalog snapshot staleness window in seconds.
pub const DEFAULT_CATALOG_TTL_SECS: u64 = 30;

/// Text style discovery budget in milliseconds.
pub const DEFAULT_TEXT_STYLE_TIMEOUT_MS: u64 = 30_000;

/// Color variable discovery budget in milliseconds.
pub const DEFAULT_COLOR_VARIABLE_TIMEOUT_MS: u64 = 20_000;

/// Library instances inspected during discovery.
pub const DEFAULT_MAX_LIBRARY_INSTANCES: usize = 100;

// ---- Matching ----

/// Absolute tolerance for line height / letter spacing in the exact text tier.
pub const DEFAULT_TEXT_TOLERANCE: f64 = 0.1;

/// Per-channel tolerance (exclusive) for the exact color tier: one 8-bit step.
pub const DEFAULT_COLOR_EXACT_TOLERANCE: f64 = 1.0 / 255.0;

/// Per-channel tolerance (inclusive) for the similar color tier.
pub const DEFAULT_COLOR_SIMILAR_TOLERANCE: f64 = 0.1;

/// Slack applied to inclusive float comparisons.
pub const FLOAT_EPSILON: f64 = 1e-9;

/// Ancestors inspected when deciding whether a node lives inside a component.
pub const DEFAULT_ANCESTOR_SCAN_DEPTH: u32 = 10;

/// Upper bound on parent hops when building a finding path.
pub const MAX_PATH_LENGTH: usize = 256;

// ---- Environment ----

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "DESIGNLINT_LOG";

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "designlint.toml";
