//! Paint slots holding literal values instead of variables.

use crate::catalog::types::ColorVariableDescriptor;
use crate::document::{Effect, NodeData, Paint, SlotPath};
use crate::findings::{ColorFinding, ColorSlotKind, FindingCategory};
use crate::matcher::Matcher;

/// Whether any fill, stroke or effect slot would be reported.
pub fn has_unbound_slots(node: &NodeData) -> bool {
    if !node.kind.can_have_paint() {
        return false;
    }
    let bound = &node.bound_variables;
    let solid = |paints: &[Paint], slot: fn(usize) -> SlotPath| {
        paints
            .iter()
            .enumerate()
            .any(|(i, p)| matches!(p, Paint::Solid { .. }) && !bound.is_bound(&slot(i)))
    };
    solid(&node.fills, SlotPath::fill)
        || solid(&node.strokes, SlotPath::stroke)
        || (0..node.effects.len()).any(|i| !bound.is_bound(&SlotPath::effect(i)))
}

/// One finding per unbound solid fill/stroke and per unbound effect, in slot order.
pub fn check(
    node: &NodeData,
    matcher: &Matcher,
    catalog: &[ColorVariableDescriptor],
) -> Vec<ColorFinding> {
    if !node.kind.can_have_paint() {
        return Vec::new();
    }
    let mut findings = Vec::new();
    for kind in [ColorSlotKind::Fill, ColorSlotKind::Stroke] {
        paint_findings(node, kind, matcher, catalog, &mut findings);
    }

    for (index, effect) in node.effects.iter().enumerate() {
        let slot = SlotPath::effect(index);
        if node.bound_variables.is_bound(&slot) {
            continue;
        }
        findings.push(effect_finding(node, effect, slot));
    }
    findings
}

fn paint_findings(
    node: &NodeData,
    kind: ColorSlotKind,
    matcher: &Matcher,
    catalog: &[ColorVariableDescriptor],
    out: &mut Vec<ColorFinding>,
) {
    let (paints, slot_at, label): (&[Paint], fn(usize) -> SlotPath, &str) = match kind {
        ColorSlotKind::Fill => (&node.fills, SlotPath::fill, "Fill"),
        ColorSlotKind::Stroke => (&node.strokes, SlotPath::stroke, "Stroke"),
        ColorSlotKind::Effect => return,
    };
    for (index, paint) in paints.iter().enumerate() {
        let Paint::Solid { color, opacity } = paint else {
            continue;
        };
        let slot = slot_at(index);
        if node.bound_variables.is_bound(&slot) {
            continue;
        }
        let hex = color.to_hex();
        out.push(ColorFinding {
            node_id: node.id.clone(),
            name: node.name.clone(),
            category: FindingCategory::Color,
            path: Vec::new(),
            description: format!("{label} {hex} is not bound to a color variable"),
            kind,
            slot,
            hex: Some(hex),
            opacity: Some(*opacity),
            candidates: matcher.match_color_variable(*color, catalog),
        });
    }
}

fn effect_finding(node: &NodeData, effect: &Effect, slot: SlotPath) -> ColorFinding {
    let shadow = effect.shadow();
    ColorFinding {
        node_id: node.id.clone(),
        name: node.name.clone(),
        category: FindingCategory::Color,
        path: Vec::new(),
        description: format!("{} is not bound to a variable", effect.label()),
        kind: ColorSlotKind::Effect,
        slot,
        hex: shadow.map(|s| s.color.to_hex()),
        opacity: shadow.map(|s| s.opacity),
        candidates: Vec::new(),
    }
}
