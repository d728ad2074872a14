//! Fixture builders shared by the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use designlint_analysis::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};
use designlint_analysis::document::{
    ComponentRef, FontName, InMemoryDocument, NodeData, NodeKind, Paint, Rgb, TextProperties,
};
use designlint_core::events::types::*;
use designlint_core::events::{DesignLintEventHandler, EventDispatcher};
use designlint_core::types::{NodeId, StyleId, VariableId};

pub fn text_style(
    id: &str,
    name: &str,
    family: &str,
    style: &str,
    size: f64,
) -> TextStyleDescriptor {
    TextStyleDescriptor {
        id: StyleId::new(id),
        name: name.to_string(),
        font_family: family.to_string(),
        font_style: style.to_string(),
        font_size: size,
        line_height: None,
        letter_spacing: None,
        remote: false,
        description: String::new(),
    }
}

pub fn remote_style(
    id: &str,
    name: &str,
    family: &str,
    style: &str,
    size: f64,
) -> TextStyleDescriptor {
    TextStyleDescriptor {
        remote: true,
        ..text_style(id, name, family, style, size)
    }
}

pub fn variable(id: &str, name: &str, color: Rgb) -> ColorVariableDescriptor {
    ColorVariableDescriptor {
        id: VariableId::new(id),
        name: name.to_string(),
        resolved_color: color,
        remote: false,
        is_local: true,
    }
}

pub fn remote_variable(id: &str, name: &str, color: Rgb) -> ColorVariableDescriptor {
    ColorVariableDescriptor {
        remote: true,
        is_local: false,
        ..variable(id, name, color)
    }
}

pub fn text(id: &str, name: &str, characters: &str) -> NodeData {
    NodeData::new(id, NodeKind::Text, name).with_text(TextProperties::new(
        characters,
        FontName::new("Inter", "Regular"),
        14.0,
    ))
}

pub fn rect(id: &str, name: &str, color: Rgb) -> NodeData {
    NodeData::new(id, NodeKind::Rectangle, name).with_fill(Paint::solid(color))
}

pub fn instance(id: &str, name: &str, remote: bool) -> NodeData {
    NodeData::new(id, NodeKind::Instance, name).with_main_component(ComponentRef {
        id: NodeId::new(format!("{id}-main")),
        name: name.to_string(),
        remote,
    })
}

pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);

/// Document with one page, returned with the page id.
pub fn one_page() -> (InMemoryDocument, NodeId) {
    let mut doc = InMemoryDocument::new();
    let page = doc.add_page("0:1", "Page 1");
    (doc, page)
}

pub fn id(s: &str) -> NodeId {
    NodeId::new(s)
}

/// Records every event it receives as a short `name:detail` line.
#[derive(Default)]
pub struct EventLog {
    lines: Mutex<Vec<String>>,
}

impl EventLog {
    /// A dispatcher with a fresh log registered on it.
    pub fn attach() -> (Arc<EventLog>, EventDispatcher) {
        let log = Arc::new(EventLog::default());
        let mut events = EventDispatcher::new();
        events.register(log.clone());
        (log, events)
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.lines().iter().filter(|l| l.starts_with(prefix)).count()
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl DesignLintEventHandler for EventLog {
    fn on_scan_started(&self, e: &ScanStartedEvent) {
        self.push(format!("scan_started:{}", e.scope));
    }
    fn on_scan_progress(&self, e: &ScanProgressEvent) {
        self.push(format!("scan_progress:{}/{}", e.processed, e.total));
    }
    fn on_scan_complete(&self, e: &ScanCompleteEvent) {
        self.push(format!("scan_complete:{}", e.timed_out));
    }
    fn on_scan_error(&self, e: &ScanErrorEvent) {
        self.push(format!("scan_error:{}", e.code));
    }
    fn on_catalog_refreshed(&self, e: &CatalogRefreshedEvent) {
        self.push(format!("catalog_refreshed:{}", e.catalog));
    }
    fn on_catalog_fallback(&self, e: &CatalogFallbackEvent) {
        self.push(format!("catalog_fallback:{}", e.catalog));
    }
    fn on_node_failed(&self, e: &NodeFailedEvent) {
        self.push(format!("node_failed:{}", e.node_id));
    }
    fn on_fix_applied(&self, e: &FixAppliedEvent) {
        self.push(format!("fix_applied:{}", e.target_id));
    }
    fn on_fix_failed(&self, e: &FixFailedEvent) {
        self.push(format!("fix_failed:{}", e.node_id));
    }
}
