//! Accumulates findings in visitation order and enforces one category per node.
//!
//! A node belongs to at most one category. Text outranks color, color
//! outranks layer. A higher-ranked finding evicts whatever a lower-ranked
//! category already holds for that node; a lower-ranked one is rejected. Within
//! a category the first writer wins, except that color keeps one finding per
//! paint slot.

use designlint_core::types::{FxHashMap, FxHashSet, NodeId};

use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};
use crate::document::SlotPath;
use crate::findings::{
    ColorFinding, Finding, FindingCategory, LayerFinding, ScanResult, ScanSummary, TextFinding,
};

/// Outcome of offering a finding to the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    Accepted,
    /// Accepted after evicting lower-priority findings for the same node.
    Replaced { evicted: usize },
    /// The node is already owned by an equal or higher priority finding.
    Rejected,
}

impl Insertion {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

#[derive(Debug, Default)]
pub struct ResultAggregator {
    text: Vec<TextFinding>,
    color: Vec<ColorFinding>,
    layer: Vec<LayerFinding>,
    owners: FxHashMap<NodeId, FindingCategory>,
    color_slots: FxHashSet<(NodeId, SlotPath)>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, finding: Finding) -> Insertion {
        let node_id = finding.node_id().clone();
        let category = finding.category();

        let mut evicted = 0;
        if let Some(&owner) = self.owners.get(&node_id) {
            if owner.outranks(category) {
                return Insertion::Rejected;
            }
            if owner == category {
                // Only color admits several findings per node, one per slot.
                let Finding::Color(color) = &finding else {
                    return Insertion::Rejected;
                };
                if self.color_slots.contains(&(node_id.clone(), color.slot)) {
                    return Insertion::Rejected;
                }
            } else {
                evicted = self.evict(&node_id, owner);
            }
        }

        self.owners.insert(node_id.clone(), category);
        match finding {
            Finding::Text(f) => self.text.push(f),
            Finding::Color(f) => {
                self.color_slots.insert((node_id, f.slot));
                self.color.push(f);
            }
            Finding::Layer(f) => self.layer.push(f),
        }

        if evicted > 0 {
            Insertion::Replaced { evicted }
        } else {
            Insertion::Accepted
        }
    }

    fn evict(&mut self, node_id: &NodeId, owner: FindingCategory) -> usize {
        match owner {
            FindingCategory::Text => {
                let before = self.text.len();
                self.text.retain(|f| &f.node_id != node_id);
                before - self.text.len()
            }
            FindingCategory::Color => {
                let before = self.color.len();
                self.color.retain(|f| &f.node_id != node_id);
                self.color_slots.retain(|(id, _)| id != node_id);
                before - self.color.len()
            }
            FindingCategory::Layer => {
                let before = self.layer.len();
                self.layer.retain(|f| &f.node_id != node_id);
                before - self.layer.len()
            }
        }
    }

    /// Category currently holding `node_id`, if any.
    pub fn owner_of(&self, node_id: &NodeId) -> Option<FindingCategory> {
        self.owners.get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.text.len() + self.color.len() + self.layer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> ScanSummary {
        ScanSummary {
            text: self.text.len(),
            color: self.color.len(),
            layer: self.layer.len(),
            total: self.len(),
            is_empty: false,
            timed_out: false,
        }
    }

    /// Close the scan. Catalogs are attached only for categories with findings.
    pub fn finish(
        self,
        text_styles: &[TextStyleDescriptor],
        color_variables: &[ColorVariableDescriptor],
        timed_out: bool,
    ) -> ScanResult {
        let mut summary = self.summary();
        summary.timed_out = timed_out;
        let available_text_styles = if self.text.is_empty() {
            Vec::new()
        } else {
            text_styles.to_vec()
        };
        let available_color_variables = if self.color.is_empty() {
            Vec::new()
        } else {
            color_variables.to_vec()
        };
        ScanResult {
            text: self.text,
            color: self.color,
            layer: self.layer,
            summary,
            available_text_styles,
            available_color_variables,
        }
    }
}
