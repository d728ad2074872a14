//! End-to-end scans through the public `Scanner` API.

mod common;

use std::collections::HashSet;

use common::*;
use designlint_analysis::document::{
    InMemoryDocument, NodeData, NodeKind, Paint, SlotPath, TextStyleRef,
};
use designlint_analysis::{ScanScope, Scanner};
use designlint_core::errors::{ErrorCode, ScanError};
use designlint_core::types::{NodeId, StyleId};

/// A text node with a red fill, a red rectangle and a loose vector.
fn mixed_page() -> (InMemoryDocument, Vec<NodeId>) {
    let (mut doc, page) = one_page();
    let card = doc
        .append(&page, NodeData::new("1:1", NodeKind::Frame, "Card"))
        .unwrap();
    doc.append(&card, text("1:2", "Title", "Hello").with_fill(Paint::solid(RED)))
        .unwrap();
    doc.append(&card, rect("1:3", "Background", RED)).unwrap();
    doc.append(&card, NodeData::new("1:4", NodeKind::Vector, "Arrow"))
        .unwrap();
    doc.add_text_style(text_style("S:1", "Body", "Inter", "Regular", 14.0));
    doc.add_color_variable(variable("V:1", "red/500", RED));
    (doc, vec![card])
}

#[test]
fn empty_scope_differs_from_clean_scope() {
    let (mut doc, page) = one_page();
    let scanner = Scanner::default();

    let empty = scanner.scan(&doc, &[]).unwrap();
    assert!(empty.result.summary.is_empty);
    assert_eq!(empty.result.total(), 0);
    assert!(!empty.result.is_clean());

    let button = doc.append(&page, instance("2:1", "Button", true)).unwrap();
    let mut label = text("2:2", "Label", "OK");
    if let Some(t) = label.text.as_mut() {
        t.style = TextStyleRef::Id(StyleId::new("S:1"));
    }
    doc.append(&button, label).unwrap();
    doc.append(
        &button,
        rect("2:3", "Surface", BLUE).with_binding(SlotPath::fill(0), "V:blue"),
    )
    .unwrap();

    let clean = scanner.scan(&doc, &[button]).unwrap();
    assert!(!clean.result.summary.is_empty);
    assert_eq!(clean.result.total(), 0);
    assert!(clean.result.is_clean());
    assert_eq!(clean.stats.nodes_visited, 3);
}

#[test]
fn each_node_lands_in_one_category() {
    let (doc, roots) = mixed_page();
    let report = Scanner::default().scan(&doc, &roots).unwrap();
    let result = &report.result;

    let text: Vec<&str> = result.text.iter().map(|f| f.node_id.as_str()).collect();
    let color: Vec<&str> = result.color.iter().map(|f| f.node_id.as_str()).collect();
    let layer: Vec<&str> = result.layer.iter().map(|f| f.node_id.as_str()).collect();
    assert_eq!(text, vec!["1:2"]);
    assert_eq!(color, vec!["1:3"]);
    assert_eq!(layer, vec!["1:1", "1:4"]);

    let mut seen = HashSet::new();
    for id in text.iter().chain(&color).chain(&layer) {
        assert!(seen.insert(*id), "{id} reported twice");
    }
    assert_eq!(result.summary.total, 4);
    assert!(report.stats.findings_superseded >= 3);
}

#[test]
fn rescanning_an_unchanged_document_is_stable() {
    let (doc, roots) = mixed_page();
    let scanner = Scanner::default();
    let first = scanner.scan(&doc, &roots).unwrap();
    let second = scanner.scan(&doc, &roots).unwrap();
    assert_eq!(first.result, second.result);
}

#[test]
fn catalogs_are_attached_only_for_reported_categories() {
    let (mut doc, page) = one_page();
    doc.add_text_style(text_style("S:1", "Body", "Inter", "Regular", 14.0));
    doc.add_color_variable(variable("V:1", "red/500", RED));
    let vector = doc
        .append(&page, NodeData::new("1:1", NodeKind::Vector, "Shape"))
        .unwrap();
    let label = doc.append(&page, text("1:2", "Label", "Hi")).unwrap();
    let scanner = Scanner::default();

    let layers_only = scanner.scan(&doc, &[vector]).unwrap().result;
    assert!(layers_only.available_text_styles.is_empty());
    assert!(layers_only.available_color_variables.is_empty());

    let with_text = scanner.scan(&doc, &[label]).unwrap().result;
    assert_eq!(with_text.available_text_styles.len(), 1);
    assert!(with_text.available_color_variables.is_empty());
}

#[test]
fn catalog_is_rediscovered_on_every_scan() {
    let (mut doc, page) = one_page();
    let label = doc.append(&page, text("1:1", "Label", "Hi")).unwrap();
    let scanner = Scanner::default();

    let before = scanner.scan(&doc, &[label.clone()]).unwrap().result;
    assert!(before.text[0].candidates.is_empty());

    doc.add_text_style(text_style("S:9", "Caption", "Inter", "Regular", 14.0));
    let after = scanner.scan(&doc, &[label]).unwrap().result;
    assert_eq!(after.text[0].candidates.len(), 1);
    assert_eq!(after.available_text_styles.len(), 1);
}

#[test]
fn scope_resolution() {
    let mut doc = InMemoryDocument::new();
    let first = doc.add_page("0:1", "Page 1");
    let second = doc.add_page("0:2", "Page 2");
    doc.append(&first, NodeData::new("1:1", NodeKind::Vector, "A"))
        .unwrap();
    let b = doc
        .append(&second, NodeData::new("2:1", NodeKind::Vector, "B"))
        .unwrap();
    let scanner = Scanner::default();
    let flagged = |scope| -> Vec<String> {
        scanner
            .scan_scope(&doc, scope)
            .unwrap()
            .result
            .layer
            .iter()
            .map(|f| f.node_id.to_string())
            .collect()
    };

    assert_eq!(flagged(ScanScope::Page), vec!["1:1"]);
    assert_eq!(flagged(ScanScope::File), vec!["1:1", "2:1"]);
    assert!(flagged(ScanScope::Selection).is_empty());

    doc.set_selection(vec![b]);
    let report = scanner.scan_scope(&doc, ScanScope::Selection).unwrap();
    assert_eq!(report.result.layer[0].path, vec!["Page 2", "B"]);
}

#[test]
fn empty_selection_is_an_empty_scope() {
    let (doc, _) = mixed_page();
    let report = Scanner::default()
        .scan_scope(&doc, ScanScope::Selection)
        .unwrap();
    assert!(report.result.summary.is_empty);
}

#[test]
fn document_without_pages_cannot_resolve_page_scope() {
    let doc = InMemoryDocument::new();
    let err = Scanner::default()
        .scan_scope(&doc, ScanScope::Page)
        .unwrap_err();
    assert!(matches!(err, ScanError::Document(_)));
    assert_eq!(err.error_code(), "DOCUMENT_ERROR");
}
