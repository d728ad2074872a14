//! Matcher and classifier thresholds.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingConfig {
    /// Line height / letter spacing tolerance for exact text matches. Default: 0.1.
    pub text_tolerance: Option<f64>,
    /// Per-channel tolerance (exclusive) for exact color matches. Default: 1/255.
    pub color_exact_tolerance: Option<f64>,
    /// Per-channel tolerance (inclusive) for similar color matches. Default: 0.1.
    pub color_similar_tolerance: Option<f64>,
    /// Ancestors inspected for the "inside a component" check. Default: 10.
    pub ancestor_scan_depth: Option<u32>,
}

impl MatchingConfig {
    pub fn effective_text_tolerance(&self) -> f64 {
        self.text_tolerance.unwrap_or(constants::DEFAULT_TEXT_TOLERANCE)
    }

    pub fn effective_color_exact_tolerance(&self) -> f64 {
        self.color_exact_tolerance
            .unwrap_or(constants::DEFAULT_COLOR_EXACT_TOLERANCE)
    }

    pub fn effective_color_similar_tolerance(&self) -> f64 {
        self.color_similar_tolerance
            .unwrap_or(constants::DEFAULT_COLOR_SIMILAR_TOLERANCE)
    }

    pub fn effective_ancestor_scan_depth(&self) -> u32 {
        self.ancestor_scan_depth
            .unwrap_or(constants::DEFAULT_ANCESTOR_SCAN_DEPTH)
    }
}
