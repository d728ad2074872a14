//! Category ownership rules of the result aggregator.

use std::collections::{HashMap, HashSet};

use designlint_analysis::aggregation::{Insertion, ResultAggregator};
use designlint_analysis::document::{NodeKind, SlotPath};
use designlint_analysis::findings::{
    ColorFinding, ColorSlotKind, Finding, FindingCategory, LayerFinding, LayerKind, TextFinding,
};
use designlint_core::types::NodeId;
use proptest::prelude::*;

fn text_finding(node: &str) -> Finding {
    Finding::Text(TextFinding {
        node_id: NodeId::new(node),
        name: node.to_string(),
        category: FindingCategory::Text,
        path: Vec::new(),
        description: String::new(),
        preview: String::new(),
        font: None,
        candidates: Vec::new(),
    })
}

fn color_finding(node: &str, slot: usize) -> Finding {
    Finding::Color(ColorFinding {
        node_id: NodeId::new(node),
        name: node.to_string(),
        category: FindingCategory::Color,
        path: Vec::new(),
        description: String::new(),
        kind: ColorSlotKind::Fill,
        slot: SlotPath::fill(slot),
        hex: Some("#000000".to_string()),
        opacity: Some(1.0),
        candidates: Vec::new(),
    })
}

fn layer_finding(node: &str) -> Finding {
    Finding::Layer(LayerFinding {
        node_id: NodeId::new(node),
        name: node.to_string(),
        category: FindingCategory::Layer,
        path: Vec::new(),
        description: String::new(),
        kind: LayerKind::Primitive,
        node_type: NodeKind::Rectangle,
    })
}

#[test]
fn text_evicts_earlier_color_findings() {
    let mut agg = ResultAggregator::new();
    assert_eq!(agg.insert(color_finding("n", 0)), Insertion::Accepted);
    assert_eq!(agg.insert(color_finding("n", 1)), Insertion::Accepted);
    assert_eq!(agg.insert(text_finding("n")), Insertion::Replaced { evicted: 2 });
    assert_eq!(agg.owner_of(&NodeId::new("n")), Some(FindingCategory::Text));

    let summary = agg.summary();
    assert_eq!((summary.text, summary.color, summary.total), (1, 0, 1));
}

#[test]
fn lower_priority_is_rejected() {
    let mut agg = ResultAggregator::new();
    agg.insert(color_finding("n", 0));
    assert_eq!(agg.insert(layer_finding("n")), Insertion::Rejected);
    assert_eq!(agg.insert(color_finding("n", 0)), Insertion::Rejected);
    assert_eq!(agg.len(), 1);
}

#[test]
fn first_text_finding_wins() {
    let mut agg = ResultAggregator::new();
    agg.insert(text_finding("n"));
    assert!(!agg.insert(text_finding("n")).is_accepted());
    assert_eq!(agg.len(), 1);
}

#[test]
fn finish_keeps_visitation_order() {
    let mut agg = ResultAggregator::new();
    for id in ["c", "a", "b"] {
        agg.insert(layer_finding(id));
    }
    let result = agg.finish(&[], &[], false);
    let order: Vec<&str> = result.layer.iter().map(|f| f.node_id.as_str()).collect();
    assert_eq!(order, vec!["c", "a", "b"]);
    assert!(!result.summary.is_empty);
    assert!(!result.summary.timed_out);
}

#[derive(Debug, Clone)]
enum Offer {
    Text(u8),
    Color(u8, u8),
    Layer(u8),
}

fn offer() -> impl Strategy<Value = Offer> {
    prop_oneof![
        (0u8..6).prop_map(Offer::Text),
        (0u8..6, 0u8..3).prop_map(|(n, s)| Offer::Color(n, s)),
        (0u8..6).prop_map(Offer::Layer),
    ]
}

proptest! {
    #[test]
    fn every_node_lands_in_its_best_category(
        offers in proptest::collection::vec(offer(), 0..40),
    ) {
        let mut agg = ResultAggregator::new();
        let mut best: HashMap<String, FindingCategory> = HashMap::new();
        for o in &offers {
            let (finding, node, category) = match *o {
                Offer::Text(n) => (text_finding(&format!("n{n}")), n, FindingCategory::Text),
                Offer::Color(n, s) => {
                    (color_finding(&format!("n{n}"), s as usize), n, FindingCategory::Color)
                }
                Offer::Layer(n) => (layer_finding(&format!("n{n}")), n, FindingCategory::Layer),
            };
            agg.insert(finding);
            best.entry(format!("n{node}"))
                .and_modify(|c| *c = (*c).min(category))
                .or_insert(category);
        }

        for (node, category) in &best {
            prop_assert_eq!(agg.owner_of(&NodeId::new(node.as_str())), Some(*category));
        }

        let result = agg.finish(&[], &[], false);
        let text: HashSet<&str> = result.text.iter().map(|f| f.node_id.as_str()).collect();
        let color: HashSet<&str> = result.color.iter().map(|f| f.node_id.as_str()).collect();
        let layer: HashSet<&str> = result.layer.iter().map(|f| f.node_id.as_str()).collect();
        prop_assert!(text.is_disjoint(&color));
        prop_assert!(text.is_disjoint(&layer));
        prop_assert!(color.is_disjoint(&layer));
        prop_assert_eq!(text.len(), result.text.len());
        prop_assert_eq!(layer.len(), result.layer.len());
        prop_assert_eq!(
            result.summary.total,
            result.text.len() + result.color.len() + result.layer.len()
        );

        let slots: HashSet<(String, SlotPath)> = result
            .color
            .iter()
            .map(|f| (f.node_id.to_string(), f.slot))
            .collect();
        prop_assert_eq!(slots.len(), result.color.len());
    }
}
