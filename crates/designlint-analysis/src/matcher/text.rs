//! Text style tiering.
//!
//! A node with a mixed font name matches nothing. A node with a mixed font
//! size can reach the fuzzy tier only. A style without a line height counts as
//! `Auto`, and one without letter spacing counts as zero spacing.

use designlint_core::constants::FLOAT_EPSILON;

use super::types::{TextCandidate, TextMatchTier};
use crate::catalog::types::TextStyleDescriptor;
use crate::document::{FontName, LetterSpacing, LineHeight, TextProperties};

pub(crate) fn rank(
    text: &TextProperties,
    catalog: &[TextStyleDescriptor],
    tolerance: f64,
) -> Vec<TextCandidate> {
    let Some(font) = text.font_name.as_ref() else {
        return Vec::new();
    };

    let tiers = [
        TextMatchTier::Exact,
        TextMatchTier::Partial,
        TextMatchTier::Fuzzy,
    ];
    for tier in tiers {
        let hits: Vec<TextCandidate> = catalog
            .iter()
            .filter(|style| satisfies(tier, font, text, style, tolerance))
            .map(|style| TextCandidate {
                descriptor: style.clone(),
                match_tier: tier,
                distance: None,
            })
            .collect();
        if !hits.is_empty() {
            return hits;
        }
    }
    Vec::new()
}

fn satisfies(
    tier: TextMatchTier,
    font: &FontName,
    text: &TextProperties,
    style: &TextStyleDescriptor,
    tolerance: f64,
) -> bool {
    if style.font_family != font.family {
        return false;
    }
    match tier {
        TextMatchTier::Fuzzy => true,
        TextMatchTier::Partial => same_face_and_size(font, text, style),
        TextMatchTier::Exact => {
            same_face_and_size(font, text, style)
                && line_height_matches(text.line_height, style.line_height, tolerance)
                && letter_spacing_matches(text.letter_spacing, style.letter_spacing, tolerance)
        }
    }
}

fn same_face_and_size(font: &FontName, text: &TextProperties, style: &TextStyleDescriptor) -> bool {
    style.font_style == font.style
        && text
            .font_size
            .is_some_and(|size| (size - style.font_size).abs() <= FLOAT_EPSILON)
}

fn within(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance + FLOAT_EPSILON
}

pub(crate) fn line_height_matches(
    node: Option<LineHeight>,
    style: Option<LineHeight>,
    tolerance: f64,
) -> bool {
    let Some(node) = node else {
        return false;
    };
    match (node, style.unwrap_or(LineHeight::Auto)) {
        (LineHeight::Auto, LineHeight::Auto) => true,
        (LineHeight::Pixels(a), LineHeight::Pixels(b)) => within(a, b, tolerance),
        (LineHeight::Percent(a), LineHeight::Percent(b)) => within(a, b, tolerance),
        _ => false,
    }
}

pub(crate) fn letter_spacing_matches(
    node: Option<LetterSpacing>,
    style: Option<LetterSpacing>,
    tolerance: f64,
) -> bool {
    let Some(node) = node else {
        return false;
    };
    let Some(style) = style else {
        return within(node.value, 0.0, tolerance);
    };
    // Zero spacing is the same in every unit.
    if node.value.abs() <= FLOAT_EPSILON && style.value.abs() <= FLOAT_EPSILON {
        return true;
    }
    node.unit == style.unit && within(node.value, style.value, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_line_height_on_style_means_auto() {
        assert!(line_height_matches(Some(LineHeight::Auto), None, 0.1));
        assert!(!line_height_matches(Some(LineHeight::Pixels(24.0)), None, 0.1));
        assert!(!line_height_matches(None, None, 0.1));
    }

    #[test]
    fn line_height_units_must_agree() {
        assert!(line_height_matches(
            Some(LineHeight::Pixels(24.05)),
            Some(LineHeight::Pixels(24.0)),
            0.1
        ));
        assert!(!line_height_matches(
            Some(LineHeight::Percent(24.0)),
            Some(LineHeight::Pixels(24.0)),
            0.1
        ));
    }

    #[test]
    fn zero_letter_spacing_ignores_unit() {
        assert!(letter_spacing_matches(
            Some(LetterSpacing::percent(0.0)),
            Some(LetterSpacing::pixels(0.0)),
            0.1
        ));
        assert!(!letter_spacing_matches(
            Some(LetterSpacing::percent(2.0)),
            Some(LetterSpacing::pixels(2.0)),
            0.1
        ));
        assert!(letter_spacing_matches(Some(LetterSpacing::pixels(0.05)), None, 0.1));
    }
}
