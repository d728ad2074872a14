//! Finding records and the serializable scan result.

pub mod result;

pub use result::{ScanResult, ScanSummary};

use designlint_core::types::NodeId;
use serde::{Deserialize, Serialize};

use crate::document::{NodeKind, SlotPath};
use crate::matcher::{ColorCandidate, TextCandidate};

/// Finding category. Declaration order is dedup priority: text beats color beats layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingCategory {
    Text,
    Color,
    Layer,
}

impl FindingCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Color => "color",
            Self::Layer => "layer",
        }
    }

    /// Whether a finding of `self` takes the node away from `other`.
    pub fn outranks(&self, other: FindingCategory) -> bool {
        *self < other
    }
}

/// Text node without a single shared style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFinding {
    pub node_id: NodeId,
    pub name: String,
    pub category: FindingCategory,
    /// Names from the owning page down to the node itself.
    pub path: Vec<String>,
    pub description: String,
    /// Leading characters of the text content.
    pub preview: String,
    /// `Inter Bold 16`, or `None` when the font is mixed.
    pub font: Option<String>,
    pub candidates: Vec<TextCandidate>,
}

impl TextFinding {
    /// Best candidate, applied by a one-click fix.
    pub fn suggested(&self) -> Option<&TextCandidate> {
        self.candidates.first()
    }
}

/// Which paint list an unbound color lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorSlotKind {
    Fill,
    Stroke,
    Effect,
}

/// One paint slot holding a literal value instead of a variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorFinding {
    pub node_id: NodeId,
    pub name: String,
    pub category: FindingCategory,
    pub path: Vec<String>,
    pub description: String,
    pub kind: ColorSlotKind,
    pub slot: SlotPath,
    /// `#RRGGBB`; absent for blurs, which carry no color.
    pub hex: Option<String>,
    pub opacity: Option<f64>,
    /// Always empty for effect slots.
    pub candidates: Vec<ColorCandidate>,
}

impl ColorFinding {
    pub fn suggested(&self) -> Option<&ColorCandidate> {
        self.candidates.first()
    }
}

/// Why a layer looks like it should be a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LayerKind {
    CustomShape,
    Image,
    Primitive,
    GroupWithComponents,
}

impl LayerKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::CustomShape => "Custom shape outside any component",
            Self::Image => "Image layer outside any component",
            Self::Primitive => "Layer could be replaced by a component",
            Self::GroupWithComponents => "Group mixes components and shapes outside a component",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerFinding {
    pub node_id: NodeId,
    pub name: String,
    pub category: FindingCategory,
    pub path: Vec<String>,
    pub description: String,
    pub kind: LayerKind,
    pub node_type: NodeKind,
}

/// Any finding, as produced by the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    Text(TextFinding),
    Color(ColorFinding),
    Layer(LayerFinding),
}

impl Finding {
    pub fn node_id(&self) -> &NodeId {
        match self {
            Self::Text(f) => &f.node_id,
            Self::Color(f) => &f.node_id,
            Self::Layer(f) => &f.node_id,
        }
    }

    pub fn category(&self) -> FindingCategory {
        match self {
            Self::Text(_) => FindingCategory::Text,
            Self::Color(_) => FindingCategory::Color,
            Self::Layer(_) => FindingCategory::Layer,
        }
    }

    pub fn set_path(&mut self, path: Vec<String>) {
        match self {
            Self::Text(f) => f.path = path,
            Self::Color(f) => f.path = path,
            Self::Layer(f) => f.path = path,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            Self::Text(f) => &f.path,
            Self::Color(f) => &f.path,
            Self::Layer(f) => &f.path,
        }
    }
}
