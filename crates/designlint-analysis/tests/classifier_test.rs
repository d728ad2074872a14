//! Classifier rule tests, run node by node against an in-memory document.

mod common;

use std::sync::Arc;

use common::*;
use designlint_analysis::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};
use designlint_analysis::classifier::{CatalogSource, Classifier};
use designlint_analysis::document::{
    Blur, DocumentAccessor, Effect, GradientKind, InMemoryDocument, NodeData, NodeKind, Paint,
    Rgb, Shadow, SlotPath, TextStyleRef,
};
use designlint_analysis::findings::{ColorSlotKind, Finding, FindingCategory, LayerKind};
use designlint_core::types::{NodeId, StyleId};

struct FixedCatalogs {
    styles: Arc<Vec<TextStyleDescriptor>>,
    variables: Arc<Vec<ColorVariableDescriptor>>,
}

impl FixedCatalogs {
    fn empty() -> Self {
        Self {
            styles: Arc::new(Vec::new()),
            variables: Arc::new(Vec::new()),
        }
    }
}

impl CatalogSource for FixedCatalogs {
    fn text_styles(&self) -> Arc<Vec<TextStyleDescriptor>> {
        Arc::clone(&self.styles)
    }

    fn color_variables(&self) -> Arc<Vec<ColorVariableDescriptor>> {
        Arc::clone(&self.variables)
    }
}

fn classify(doc: &InMemoryDocument, node: &NodeId, catalogs: &FixedCatalogs) -> Vec<Finding> {
    let node = doc.node(node).unwrap();
    Classifier::default()
        .classify(doc, &node, catalogs)
        .unwrap()
        .into_vec()
}

fn categories(findings: &[Finding]) -> Vec<FindingCategory> {
    findings.iter().map(Finding::category).collect()
}

#[test]
fn unstyled_text_yields_text_finding_with_candidates() {
    let (mut doc, page) = one_page();
    let node = doc.append(&page, text("1:1", "Title", "Welcome")).unwrap();
    let catalogs = FixedCatalogs {
        styles: Arc::new(vec![text_style("S:1", "Body", "Inter", "Regular", 14.0)]),
        variables: Arc::new(Vec::new()),
    };

    let findings = classify(&doc, &node, &catalogs);
    let Finding::Text(text) = &findings[0] else {
        panic!("expected a text finding, got {findings:?}");
    };
    assert_eq!(text.preview, "Welcome");
    assert_eq!(text.font.as_deref(), Some("Inter Regular 14"));
    assert_eq!(text.path, vec!["Page 1", "Title"]);
    assert_eq!(text.suggested().unwrap().descriptor.id, StyleId::new("S:1"));
}

#[test]
fn styled_text_is_not_a_text_finding() {
    let (mut doc, page) = one_page();
    let mut node = text("1:1", "Title", "Welcome");
    if let Some(t) = node.text.as_mut() {
        t.style = TextStyleRef::Id(StyleId::new("S:1"));
    }
    let node = doc.append(&page, node).unwrap();

    let findings = classify(&doc, &node, &FixedCatalogs::empty());
    assert!(!categories(&findings).contains(&FindingCategory::Text));
}

#[test]
fn mixed_styles_count_as_detached() {
    let (mut doc, page) = one_page();
    let mut node = text("1:1", "Title", "Welcome");
    if let Some(t) = node.text.as_mut() {
        t.style = TextStyleRef::Mixed(vec![StyleId::new("S:1"), StyleId::new("S:2")]);
    }
    let node = doc.append(&page, node).unwrap();

    let findings = classify(&doc, &node, &FixedCatalogs::empty());
    assert_eq!(findings[0].category(), FindingCategory::Text);
}

#[test]
fn one_color_finding_per_unbound_solid_slot() {
    let (mut doc, page) = one_page();
    let node = doc
        .append(
            &page,
            NodeData::new("1:1", NodeKind::Ellipse, "Dot")
                .with_fill(Paint::solid(RED))
                .with_fill(Paint::solid(BLUE))
                .with_fill(Paint::Gradient {
                    gradient: GradientKind::Linear,
                })
                .with_stroke(Paint::solid(BLUE))
                .with_binding(SlotPath::fill(0), "V:red"),
        )
        .unwrap();

    let findings = classify(&doc, &node, &FixedCatalogs::empty());
    let slots: Vec<SlotPath> = findings
        .iter()
        .filter_map(|f| match f {
            Finding::Color(c) => Some(c.slot),
            _ => None,
        })
        .collect();
    assert_eq!(slots, vec![SlotPath::fill(1), SlotPath::stroke(0)]);

    let Finding::Color(fill) = &findings[0] else {
        panic!("expected a color finding");
    };
    assert_eq!(fill.kind, ColorSlotKind::Fill);
    assert_eq!(fill.hex.as_deref(), Some("#0000FF"));
    assert_eq!(fill.opacity, Some(1.0));
}

#[test]
fn effects_are_reported_without_candidates() {
    let (mut doc, page) = one_page();
    let node = doc
        .append(
            &page,
            NodeData::new("1:1", NodeKind::Component, "Card")
                .with_effect(Effect::DropShadow(Shadow {
                    color: Rgb::new(0.0, 0.0, 0.0),
                    opacity: 0.25,
                    radius: 4.0,
                    offset_x: 0.0,
                    offset_y: 2.0,
                }))
                .with_effect(Effect::LayerBlur(Blur { radius: 8.0 })),
        )
        .unwrap();
    let catalogs = FixedCatalogs {
        styles: Arc::new(Vec::new()),
        variables: Arc::new(vec![variable("V:1", "black", Rgb::new(0.0, 0.0, 0.0))]),
    };

    let findings = classify(&doc, &node, &catalogs);
    assert_eq!(findings.len(), 2);
    for finding in &findings {
        let Finding::Color(c) = finding else {
            panic!("components are never layer findings");
        };
        assert_eq!(c.kind, ColorSlotKind::Effect);
        assert!(c.candidates.is_empty());
    }
    let Finding::Color(shadow) = &findings[0] else {
        unreachable!()
    };
    assert_eq!(shadow.hex.as_deref(), Some("#000000"));
    assert_eq!(shadow.opacity, Some(0.25));
    let Finding::Color(blur) = &findings[1] else {
        unreachable!()
    };
    assert_eq!(blur.hex, None);
}

#[test]
fn vector_outside_component_is_custom_shape() {
    let (mut doc, page) = one_page();
    let frame = doc
        .append(&page, NodeData::new("1:1", NodeKind::Frame, "Hero"))
        .unwrap();
    let vector = doc
        .append(&frame, NodeData::new("1:2", NodeKind::Vector, "Swoosh"))
        .unwrap();

    let findings = classify(&doc, &vector, &FixedCatalogs::empty());
    let Finding::Layer(layer) = &findings[0] else {
        panic!("expected a layer finding");
    };
    assert_eq!(layer.kind, LayerKind::CustomShape);
    assert_eq!(layer.node_type, NodeKind::Vector);
    assert_eq!(layer.path, vec!["Page 1", "Hero", "Swoosh"]);
}

#[test]
fn shapes_inside_instances_are_not_layer_findings() {
    let (mut doc, page) = one_page();
    let inst = doc.append(&page, instance("1:1", "Button", true)).unwrap();
    let inner = doc
        .append(&inst, NodeData::new("1:2", NodeKind::Frame, "Body"))
        .unwrap();
    let vector = doc
        .append(&inner, NodeData::new("1:3", NodeKind::Vector, "Icon"))
        .unwrap();

    assert!(classify(&doc, &vector, &FixedCatalogs::empty()).is_empty());
    assert!(classify(&doc, &inner, &FixedCatalogs::empty()).is_empty());
    assert!(classify(&doc, &inst, &FixedCatalogs::empty()).is_empty());
}

#[test]
fn image_rectangle_is_image_layer() {
    let (mut doc, page) = one_page();
    let node = doc
        .append(
            &page,
            NodeData::new("1:1", NodeKind::Rectangle, "Photo").with_fill(Paint::Image {
                image_hash: Some("abc".into()),
            }),
        )
        .unwrap();

    let findings = classify(&doc, &node, &FixedCatalogs::empty());
    assert_eq!(findings.len(), 1);
    let Finding::Layer(layer) = &findings[0] else {
        panic!("expected a layer finding");
    };
    assert_eq!(layer.kind, LayerKind::Image);
}

#[test]
fn bare_ellipse_fails_component_heuristic() {
    let (mut doc, page) = one_page();
    let node = doc
        .append(&page, NodeData::new("1:1", NodeKind::Ellipse, "Empty"))
        .unwrap();
    assert!(classify(&doc, &node, &FixedCatalogs::empty()).is_empty());
}

#[test]
fn group_with_instance_child_is_flagged() {
    let (mut doc, page) = one_page();
    let group = doc
        .append(&page, NodeData::new("1:1", NodeKind::Group, "Toolbar"))
        .unwrap();
    doc.append(&group, instance("1:2", "Icon Button", false)).unwrap();
    let plain = doc
        .append(&page, NodeData::new("2:1", NodeKind::Group, "Stack"))
        .unwrap();
    doc.append(&plain, NodeData::new("2:2", NodeKind::Frame, "Row")).unwrap();

    let findings = classify(&doc, &group, &FixedCatalogs::empty());
    let Finding::Layer(layer) = &findings[0] else {
        panic!("expected a layer finding");
    };
    assert_eq!(layer.kind, LayerKind::GroupWithComponents);
    assert!(classify(&doc, &plain, &FixedCatalogs::empty()).is_empty());
}

#[test]
fn unreadable_ancestor_is_a_node_error() {
    let (mut doc, page) = one_page();
    let frame = doc
        .append(&page, NodeData::new("1:1", NodeKind::Frame, "Broken"))
        .unwrap();
    let vector = doc
        .append(&frame, NodeData::new("1:2", NodeKind::Vector, "Shape"))
        .unwrap();
    doc.mark_node_unreadable(frame);

    let node = doc.node(&vector).unwrap();
    let err = Classifier::default()
        .classify(&doc, &node, &FixedCatalogs::empty())
        .unwrap_err();
    assert_eq!(err.node_id, vector);
}

#[test]
fn detached_text_also_trips_color_and_layer_rules() {
    // Ownership is settled by the aggregator, not here.
    let (mut doc, page) = one_page();
    let node = doc
        .append(&page, text("1:1", "Label", "Hi").with_fill(Paint::solid(RED)))
        .unwrap();

    let findings = classify(&doc, &node, &FixedCatalogs::empty());
    assert_eq!(
        categories(&findings),
        vec![
            FindingCategory::Text,
            FindingCategory::Color,
            FindingCategory::Layer
        ]
    );
}

#[test]
fn page_and_root_produce_nothing() {
    let mut doc = InMemoryDocument::new();
    let page = doc.add_page("0:1", "Page 1");
    assert!(classify(&doc, &page, &FixedCatalogs::empty()).is_empty());
}
