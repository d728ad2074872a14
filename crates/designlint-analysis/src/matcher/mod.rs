//! Tiered similarity matching of text properties and colors against the catalogs.

pub mod color;
pub mod text;
pub mod types;

pub use types::{Candidate, ColorCandidate, ColorMatchTier, TextCandidate, TextMatchTier};

use designlint_core::config::MatchingConfig;

use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};
use crate::document::{Rgb, TextProperties};

/// Ranks catalog entries for a detached text node or color.
///
/// Only the strictest tier with at least one hit is ever returned.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    text_tolerance: f64,
    color_exact_tolerance: f64,
    color_similar_tolerance: f64,
}

impl Matcher {
    pub fn from_config(config: &MatchingConfig) -> Self {
        Self {
            text_tolerance: config.effective_text_tolerance(),
            color_exact_tolerance: config.effective_color_exact_tolerance(),
            color_similar_tolerance: config.effective_color_similar_tolerance(),
        }
    }

    pub fn match_text_style(
        &self,
        text: &TextProperties,
        catalog: &[TextStyleDescriptor],
    ) -> Vec<TextCandidate> {
        text::rank(text, catalog, self.text_tolerance)
    }

    pub fn match_color_variable(
        &self,
        color: Rgb,
        catalog: &[ColorVariableDescriptor],
    ) -> Vec<ColorCandidate> {
        color::rank(
            color,
            catalog,
            self.color_exact_tolerance,
            self.color_similar_tolerance,
        )
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}
