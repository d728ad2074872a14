//! Color variable tiering.

use designlint_core::constants::FLOAT_EPSILON;

use super::types::{ColorCandidate, ColorMatchTier};
use crate::catalog::types::ColorVariableDescriptor;
use crate::document::Rgb;

/// Exact hits if any, otherwise similar hits. Each tier is ordered by summed
/// channel distance; equal distances keep catalog order.
pub(crate) fn rank(
    color: Rgb,
    catalog: &[ColorVariableDescriptor],
    exact_tolerance: f64,
    similar_tolerance: f64,
) -> Vec<ColorCandidate> {
    let exact = collect(color, catalog, ColorMatchTier::Exact, |delta| {
        delta < exact_tolerance
    });
    if !exact.is_empty() {
        return exact;
    }
    collect(color, catalog, ColorMatchTier::Similar, |delta| {
        delta <= similar_tolerance + FLOAT_EPSILON
    })
}

fn collect(
    color: Rgb,
    catalog: &[ColorVariableDescriptor],
    tier: ColorMatchTier,
    accept: impl Fn(f64) -> bool,
) -> Vec<ColorCandidate> {
    let mut hits: Vec<ColorCandidate> = catalog
        .iter()
        .filter(|v| accept(color.max_channel_delta(&v.resolved_color)))
        .map(|v| ColorCandidate {
            descriptor: v.clone(),
            match_tier: tier,
            distance: Some(color.manhattan_distance(&v.resolved_color)),
        })
        .collect();
    hits.sort_by(|a, b| {
        let da = a.distance.unwrap_or(f64::INFINITY);
        let db = b.distance.unwrap_or(f64::INFINITY);
        da.total_cmp(&db)
    });
    hits
}
