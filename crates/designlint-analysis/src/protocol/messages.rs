//! JSON messages exchanged with the presentation layer.

use designlint_core::types::{NodeId, StyleId, VariableId};
use serde::{Deserialize, Serialize};

use crate::findings::ScanResult;
use crate::scanner::{ScanScope, ScanStats};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Request {
    Scan {
        scope: ScanScope,
    },
    ApplyTextStyle {
        node_id: NodeId,
        style_id: StyleId,
    },
    ApplyColorVariable {
        node_id: NodeId,
        variable_id: VariableId,
        /// Slot to bind, e.g. `fills/0`.
        property_path: String,
    },
    SelectNode {
        node_id: NodeId,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Response {
    Init {
        selection_count: usize,
        page_name: String,
    },
    ScanResults {
        findings: ScanResult,
        stats: ScanStats,
    },
    ScanError {
        code: String,
        message: String,
    },
    /// A selection scan was requested with nothing selected.
    NoSelection,
    /// Outcome of an apply request, shown as a single notification.
    Notify {
        message: String,
        error: bool,
    },
}

impl Response {
    pub fn notify(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            error: false,
        }
    }

    pub fn notify_error(message: impl Into<String>) -> Self {
        Self::Notify {
            message: message.into(),
            error: true,
        }
    }
}
