//! Text without a shared style.

use crate::catalog::types::TextStyleDescriptor;
use crate::document::{NodeData, NodeKind, TextProperties, TextStyleRef};
use crate::findings::{FindingCategory, TextFinding};
use crate::matcher::Matcher;

const PREVIEW_CHARS: usize = 40;

/// Whether the rule applies. Cheap: no catalog access.
///
/// A text node the host reports without text properties has no style either.
pub fn is_detached_text(node: &NodeData) -> bool {
    node.kind == NodeKind::Text && node.text.as_ref().map_or(true, |t| t.style.is_detached())
}

pub fn check(
    node: &NodeData,
    matcher: &Matcher,
    catalog: &[TextStyleDescriptor],
) -> Option<TextFinding> {
    if !is_detached_text(node) {
        return None;
    }
    let unknown;
    let text = match node.text.as_ref() {
        Some(text) => text,
        None => {
            unknown = TextProperties::default();
            &unknown
        }
    };
    let description = match &text.style {
        TextStyleRef::Mixed(_) => "Text uses several text styles".to_string(),
        TextStyleRef::Unset | TextStyleRef::Id(_) => "Text has no text style".to_string(),
    };
    Some(TextFinding {
        node_id: node.id.clone(),
        name: node.name.clone(),
        category: FindingCategory::Text,
        path: Vec::new(),
        description,
        preview: preview(&text.characters),
        font: font_label(text),
        candidates: matcher.match_text_style(text, catalog),
    })
}

fn preview(characters: &str) -> String {
    let mut chars = characters.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

fn font_label(text: &TextProperties) -> Option<String> {
    let font = text.font_name.as_ref()?;
    Some(match text.font_size {
        Some(size) if size.fract() == 0.0 => {
            format!("{} {} {}", font.family, font.style, size as i64)
        }
        Some(size) => format!("{} {} {}", font.family, font.style, size),
        None => format!("{} {}", font.family, font.style),
    })
}
