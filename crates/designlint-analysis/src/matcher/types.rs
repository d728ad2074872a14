//! Ranked match candidates.

use serde::{Deserialize, Serialize};

use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};

/// Text match strictness, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextMatchTier {
    /// Family, style and size identical; line height and letter spacing within tolerance.
    Exact,
    /// Family, style and size identical.
    Partial,
    /// Family identical.
    Fuzzy,
}

/// Color match strictness, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMatchTier {
    Exact,
    Similar,
}

/// One ranked remediation candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate<D, T> {
    pub descriptor: D,
    pub match_tier: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
}

pub type TextCandidate = Candidate<TextStyleDescriptor, TextMatchTier>;
pub type ColorCandidate = Candidate<ColorVariableDescriptor, ColorMatchTier>;
