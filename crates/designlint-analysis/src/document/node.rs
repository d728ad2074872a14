//! Read-only node snapshots and the paint/text value types they carry.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use designlint_core::types::{NodeId, StyleId, VariableId};
use serde::{Deserialize, Serialize};

/// Closed set of node kinds the engine understands.
///
/// Every rule matches this exhaustively, so a new kind is a compile error
/// in the classifier rather than a silently skipped string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeKind {
    Text,
    Rectangle,
    Ellipse,
    Polygon,
    Star,
    Frame,
    Group,
    Component,
    Instance,
    Vector,
    BooleanOperation,
    Line,
    Page,
    Root,
}

impl NodeKind {
    /// Kinds that carry fills, strokes and effects.
    pub fn can_have_paint(&self) -> bool {
        match self {
            Self::Rectangle
            | Self::Ellipse
            | Self::Polygon
            | Self::Star
            | Self::Frame
            | Self::Group
            | Self::Component
            | Self::Instance
            | Self::Text
            | Self::Vector
            | Self::BooleanOperation
            | Self::Line => true,
            Self::Page | Self::Root => false,
        }
    }

    /// Kinds that mark "this subtree is already a reusable component".
    pub fn is_component_boundary(&self) -> bool {
        matches!(self, Self::Component | Self::Instance)
    }

    /// Kinds that end an upward walk: nothing above them belongs to the design.
    pub fn is_container_root(&self) -> bool {
        matches!(self, Self::Page | Self::Root)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Rectangle => "RECTANGLE",
            Self::Ellipse => "ELLIPSE",
            Self::Polygon => "POLYGON",
            Self::Star => "STAR",
            Self::Frame => "FRAME",
            Self::Group => "GROUP",
            Self::Component => "COMPONENT",
            Self::Instance => "INSTANCE",
            Self::Vector => "VECTOR",
            Self::BooleanOperation => "BOOLEAN_OPERATION",
            Self::Line => "LINE",
            Self::Page => "PAGE",
            Self::Root => "ROOT",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Linear RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Largest per-channel absolute difference.
    pub fn max_channel_delta(&self, other: &Rgb) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }

    /// Sum of per-channel absolute differences.
    pub fn manhattan_distance(&self, other: &Rgb) -> f64 {
        (self.r - other.r).abs() + (self.g - other.g).abs() + (self.b - other.b).abs()
    }

    /// `#RRGGBB`, channels clamped and rounded to 8 bits.
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GradientKind {
    Linear,
    Radial,
    Angular,
    Diamond,
}

/// One entry of a fill or stroke list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE", rename_all_fields = "camelCase")]
pub enum Paint {
    Solid {
        color: Rgb,
        #[serde(default = "full_opacity")]
        opacity: f64,
    },
    Image {
        #[serde(default)]
        image_hash: Option<String>,
    },
    Gradient {
        gradient: GradientKind,
    },
}

fn full_opacity() -> f64 {
    1.0
}

impl Paint {
    pub fn solid(color: Rgb) -> Self {
        Self::Solid {
            color,
            opacity: 1.0,
        }
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: Rgb,
    #[serde(default = "full_opacity")]
    pub opacity: f64,
    #[serde(default)]
    pub radius: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blur {
    pub radius: f64,
}

/// One entry of the effects list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow(Shadow),
    InnerShadow(Shadow),
    LayerBlur(Blur),
    BackgroundBlur(Blur),
}

impl Effect {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DropShadow(_) => "Drop shadow",
            Self::InnerShadow(_) => "Inner shadow",
            Self::LayerBlur(_) => "Layer blur",
            Self::BackgroundBlur(_) => "Background blur",
        }
    }

    pub fn shadow(&self) -> Option<&Shadow> {
        match self {
            Self::DropShadow(s) | Self::InnerShadow(s) => Some(s),
            Self::LayerBlur(_) | Self::BackgroundBlur(_) => None,
        }
    }
}

/// Which paint list a slot lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintProperty {
    Fills,
    Strokes,
    Effects,
}

impl PaintProperty {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fills => "fills",
            Self::Strokes => "strokes",
            Self::Effects => "effects",
        }
    }
}

/// Address of a single fill/stroke/effect entry, rendered as `fills/0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct SlotPath {
    pub property: PaintProperty,
    pub index: usize,
}

impl SlotPath {
    pub const fn new(property: PaintProperty, index: usize) -> Self {
        Self { property, index }
    }

    pub const fn fill(index: usize) -> Self {
        Self::new(PaintProperty::Fills, index)
    }

    pub const fn stroke(index: usize) -> Self {
        Self::new(PaintProperty::Strokes, index)
    }

    pub const fn effect(index: usize) -> Self {
        Self::new(PaintProperty::Effects, index)
    }
}

impl fmt::Display for SlotPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.property.name(), self.index)
    }
}

/// Accepts `fills/0`, `fills.0` and `fills[0]`.
impl FromStr for SlotPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(']');
        let (prop, idx) = trimmed
            .split_once(['/', '.', '['])
            .ok_or_else(|| format!("missing slot index in '{s}'"))?;
        let property = match prop {
            "fills" => PaintProperty::Fills,
            "strokes" => PaintProperty::Strokes,
            "effects" => PaintProperty::Effects,
            other => return Err(format!("unknown paint property '{other}'")),
        };
        let index = idx
            .parse::<usize>()
            .map_err(|_| format!("invalid slot index in '{s}'"))?;
        Ok(Self { property, index })
    }
}

impl From<SlotPath> for String {
    fn from(slot: SlotPath) -> Self {
        slot.to_string()
    }
}

impl TryFrom<String> for SlotPath {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Variables bound to individual paint slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundVariables {
    pub fills: BTreeMap<usize, VariableId>,
    pub strokes: BTreeMap<usize, VariableId>,
    pub effects: BTreeMap<usize, VariableId>,
}

impl BoundVariables {
    fn slots(&self, property: PaintProperty) -> &BTreeMap<usize, VariableId> {
        match property {
            PaintProperty::Fills => &self.fills,
            PaintProperty::Strokes => &self.strokes,
            PaintProperty::Effects => &self.effects,
        }
    }

    pub fn get(&self, slot: &SlotPath) -> Option<&VariableId> {
        self.slots(slot.property).get(&slot.index)
    }

    pub fn is_bound(&self, slot: &SlotPath) -> bool {
        self.get(slot).is_some()
    }

    pub fn bind(&mut self, slot: SlotPath, variable: VariableId) {
        let slots = match slot.property {
            PaintProperty::Fills => &mut self.fills,
            PaintProperty::Strokes => &mut self.strokes,
            PaintProperty::Effects => &mut self.effects,
        };
        slots.insert(slot.index, variable);
    }

    /// Fill and stroke bindings, in slot order.
    pub fn paint_bindings(&self) -> impl Iterator<Item = &VariableId> {
        self.fills.values().chain(self.strokes.values())
    }

    pub fn is_empty(&self) -> bool {
        self.fills.is_empty() && self.strokes.is_empty() && self.effects.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineHeight {
    Auto,
    Pixels(f64),
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpacingUnit {
    Pixels,
    Percent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LetterSpacing {
    pub value: f64,
    pub unit: SpacingUnit,
}

impl LetterSpacing {
    pub const fn pixels(value: f64) -> Self {
        Self {
            value,
            unit: SpacingUnit::Pixels,
        }
    }

    pub const fn percent(value: f64) -> Self {
        Self {
            value,
            unit: SpacingUnit::Percent,
        }
    }
}

/// Style assignment of a text node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TextStyleRef {
    /// No style assigned.
    #[default]
    Unset,
    /// One style covers the whole node.
    Id(StyleId),
    /// Character ranges use different styles; carries the ids of the styled ranges.
    Mixed(Vec<StyleId>),
}

impl TextStyleRef {
    /// Whether the node lacks a single shared style.
    pub fn is_detached(&self) -> bool {
        match self {
            Self::Unset | Self::Mixed(_) => true,
            Self::Id(id) => id.is_empty(),
        }
    }

    /// Every style id referenced by the node.
    pub fn referenced_ids(&self) -> &[StyleId] {
        match self {
            Self::Unset => &[],
            Self::Id(id) => std::slice::from_ref(id),
            Self::Mixed(ids) => ids,
        }
    }
}

/// Text-specific properties. `None` on a font field means "mixed" across ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextProperties {
    pub characters: String,
    pub style: TextStyleRef,
    pub font_name: Option<FontName>,
    pub font_size: Option<f64>,
    pub line_height: Option<LineHeight>,
    pub letter_spacing: Option<LetterSpacing>,
}

impl TextProperties {
    pub fn new(characters: impl Into<String>, font: FontName, size: f64) -> Self {
        Self {
            characters: characters.into(),
            style: TextStyleRef::Unset,
            font_name: Some(font),
            font_size: Some(size),
            line_height: Some(LineHeight::Auto),
            letter_spacing: Some(LetterSpacing::percent(0.0)),
        }
    }

    pub fn with_style(mut self, style: TextStyleRef) -> Self {
        self.style = style;
        self
    }

    pub fn with_line_height(mut self, line_height: LineHeight) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn with_letter_spacing(mut self, spacing: LetterSpacing) -> Self {
        self.letter_spacing = Some(spacing);
        self
    }
}

/// The component an instance was created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRef {
    pub id: NodeId,
    pub name: String,
    /// Defined in an external library rather than this document.
    #[serde(default)]
    pub remote: bool,
}

/// Owned, read-only snapshot of one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub id: NodeId,
    pub kind: NodeKind,
    pub name: String,
    /// Lookup-only back reference. Never dereferenced past the document's lifetime.
    #[serde(default)]
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub children: Vec<NodeId>,
    #[serde(default)]
    pub fills: Vec<Paint>,
    #[serde(default)]
    pub strokes: Vec<Paint>,
    #[serde(default)]
    pub effects: Vec<Effect>,
    #[serde(default)]
    pub bound_variables: BoundVariables,
    #[serde(default)]
    pub text: Option<TextProperties>,
    #[serde(default)]
    pub main_component: Option<ComponentRef>,
}

impl NodeData {
    pub fn new(id: impl Into<NodeId>, kind: NodeKind, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            parent: None,
            children: Vec::new(),
            fills: Vec::new(),
            strokes: Vec::new(),
            effects: Vec::new(),
            bound_variables: BoundVariables::default(),
            text: None,
            main_component: None,
        }
    }

    pub fn with_fill(mut self, paint: Paint) -> Self {
        self.fills.push(paint);
        self
    }

    pub fn with_stroke(mut self, paint: Paint) -> Self {
        self.strokes.push(paint);
        self
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_binding(mut self, slot: SlotPath, variable: impl Into<VariableId>) -> Self {
        self.bound_variables.bind(slot, variable.into());
        self
    }

    pub fn with_text(mut self, text: TextProperties) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_main_component(mut self, component: ComponentRef) -> Self {
        self.main_component = Some(component);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn has_image_fill(&self) -> bool {
        self.fills.iter().any(Paint::is_image)
    }

    pub fn has_paint(&self) -> bool {
        !self.fills.is_empty() || !self.strokes.is_empty()
    }

    /// Instance created from a library component.
    pub fn is_library_instance(&self) -> bool {
        self.kind == NodeKind::Instance
            && self.main_component.as_ref().is_some_and(|c| c.remote)
    }
}
