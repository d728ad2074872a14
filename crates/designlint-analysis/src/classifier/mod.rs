//! Per-node drift rules.
//!
//! Every rule runs independently; a node may come back with findings in more
//! than one category and the aggregator settles ownership.

pub mod ancestry;
pub mod color_rule;
pub mod layer_rule;
pub mod text_rule;

use std::sync::Arc;

use designlint_core::config::MatchingConfig;
use designlint_core::errors::NodeError;
use designlint_core::types::collections::SmallVec4;

use crate::catalog::types::{ColorVariableDescriptor, TextStyleDescriptor};
use crate::document::{DocumentAccessor, NodeData};
use crate::findings::Finding;
use crate::matcher::Matcher;

/// Catalogs, fetched only when a rule needs candidates.
pub trait CatalogSource {
    fn text_styles(&self) -> Arc<Vec<TextStyleDescriptor>>;
    fn color_variables(&self) -> Arc<Vec<ColorVariableDescriptor>>;
}

#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    matcher: Matcher,
    ancestor_scan_depth: usize,
}

impl Classifier {
    pub fn from_config(config: &MatchingConfig) -> Self {
        Self {
            matcher: Matcher::from_config(config),
            ancestor_scan_depth: config.effective_ancestor_scan_depth() as usize,
        }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Findings for one node, each carrying the node's path.
    pub fn classify<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
        node: &NodeData,
        catalogs: &dyn CatalogSource,
    ) -> Result<SmallVec4<Finding>, NodeError> {
        let mut findings: SmallVec4<Finding> = SmallVec4::new();

        if text_rule::is_detached_text(node) {
            let styles = catalogs.text_styles();
            if let Some(f) = text_rule::check(node, &self.matcher, &styles) {
                findings.push(Finding::Text(f));
            }
        }

        if color_rule::has_unbound_slots(node) {
            let variables = catalogs.color_variables();
            findings.extend(
                color_rule::check(node, &self.matcher, &variables)
                    .into_iter()
                    .map(Finding::Color),
            );
        }

        let layer = layer_rule::check(doc, node, self.ancestor_scan_depth)
            .map_err(|e| NodeError::new(node.id.clone(), e))?;
        if let Some(f) = layer {
            findings.push(Finding::Layer(f));
        }

        if !findings.is_empty() {
            let path = ancestry::node_path(doc, node)
                .map_err(|e| NodeError::new(node.id.clone(), e))?;
            for finding in findings.iter_mut() {
                finding.set_path(path.clone());
            }
        }
        Ok(findings)
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}
