//! The serializable result of one scan.

use serde::{Deserialize, Serialize};

use super::{ColorFinding, LayerFinding, TextFinding};
use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub text: usize,
    pub color: usize,
    pub layer: usize,
    pub total: usize,
    /// Nothing was in scope. A clean scope has `is_empty == false` and `total == 0`.
    pub is_empty: bool,
    /// The scan ran out of time and these findings are partial.
    #[serde(default)]
    pub timed_out: bool,
}

/// Findings by category plus the catalogs offered for manual selection.
///
/// Holds plain values only, so it can cross the presentation boundary as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub text: Vec<TextFinding>,
    pub color: Vec<ColorFinding>,
    pub layer: Vec<LayerFinding>,
    pub summary: ScanSummary,
    /// Full text style catalog; populated when there is at least one text finding.
    #[serde(default)]
    pub available_text_styles: Vec<TextStyleDescriptor>,
    /// Full color variable catalog; populated when there is at least one color finding.
    #[serde(default)]
    pub available_color_variables: Vec<ColorVariableDescriptor>,
}

impl ScanResult {
    /// Result for a scan with nothing in scope.
    pub fn empty_scope() -> Self {
        Self {
            summary: ScanSummary {
                is_empty: true,
                ..ScanSummary::default()
            },
            ..Self::default()
        }
    }

    pub fn total(&self) -> usize {
        self.summary.total
    }

    pub fn is_clean(&self) -> bool {
        !self.summary.is_empty && self.summary.total == 0
    }
}
