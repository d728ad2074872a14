//! Which nodes a scan starts from.

use std::fmt;

use designlint_core::errors::DocumentError;
use designlint_core::types::NodeId;
use serde::{Deserialize, Serialize};

use crate::document::DocumentAccessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanScope {
    /// The current selection.
    Selection,
    /// Top-level children of the current page.
    Page,
    /// Top-level children of every page.
    File,
}

impl ScanScope {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Selection => "selection",
            Self::Page => "page",
            Self::File => "file",
        }
    }

    /// Root nodes for this scope, in document order.
    pub fn resolve<D: DocumentAccessor + ?Sized>(
        &self,
        doc: &D,
    ) -> Result<Vec<NodeId>, DocumentError> {
        match self {
            Self::Selection => doc.selection(),
            Self::Page => {
                let page = doc.current_page()?;
                Ok(doc.node(&page)?.children)
            }
            Self::File => {
                let mut roots = Vec::new();
                for page in doc.root_pages()? {
                    roots.extend(doc.node(&page)?.children);
                }
                Ok(roots)
            }
        }
    }
}

impl fmt::Display for ScanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
