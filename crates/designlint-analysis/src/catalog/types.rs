//! Catalog descriptors and their presentation order.

use std::cmp::Ordering;

use designlint_core::types::{StyleId, VariableId};
use serde::{Deserialize, Serialize};

use crate::document::{LetterSpacing, LineHeight, Rgb};

/// A reusable text style, local or from a library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyleDescriptor {
    pub id: StyleId,
    pub name: String,
    pub font_family: String,
    pub font_style: String,
    pub font_size: f64,
    #[serde(default)]
    pub line_height: Option<LineHeight>,
    #[serde(default)]
    pub letter_spacing: Option<LetterSpacing>,
    #[serde(default)]
    pub remote: bool,
    #[serde(default)]
    pub description: String,
}

/// A color variable resolved to a concrete value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorVariableDescriptor {
    pub id: VariableId,
    pub name: String,
    pub resolved_color: Rgb,
    #[serde(default)]
    pub remote: bool,
    #[serde(default = "default_true")]
    pub is_local: bool,
}

fn default_true() -> bool {
    true
}

/// What the presentation order needs from a descriptor.
pub trait CatalogEntry {
    fn entry_id(&self) -> &str;
    fn entry_name(&self) -> &str;
    fn is_remote(&self) -> bool;
}

impl CatalogEntry for TextStyleDescriptor {
    fn entry_id(&self) -> &str {
        self.id.as_str()
    }

    fn entry_name(&self) -> &str {
        &self.name
    }

    fn is_remote(&self) -> bool {
        self.remote
    }
}

impl CatalogEntry for ColorVariableDescriptor {
    fn entry_id(&self) -> &str {
        self.id.as_str()
    }

    fn entry_name(&self) -> &str {
        &self.name
    }

    fn is_remote(&self) -> bool {
        self.remote
    }
}

/// Local before remote, then case-insensitive name, then exact name, then id.
pub fn presentation_order<E: CatalogEntry>(a: &E, b: &E) -> Ordering {
    a.is_remote()
        .cmp(&b.is_remote())
        .then_with(|| {
            a.entry_name()
                .to_lowercase()
                .cmp(&b.entry_name().to_lowercase())
        })
        .then_with(|| a.entry_name().cmp(b.entry_name()))
        .then_with(|| a.entry_id().cmp(b.entry_id()))
}

/// Stable sort into presentation order.
pub fn sort_catalog<E: CatalogEntry>(entries: &mut [E]) {
    entries.sort_by(presentation_order);
}
