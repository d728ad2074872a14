//! Request handling for one open document.

use designlint_core::config::DesignLintConfig;
use designlint_core::errors::{ErrorCode, ProtocolError};
use designlint_core::events::EventDispatcher;
use designlint_core::traits::CancellationToken;

use super::messages::{Request, Response};
use crate::document::{DocumentAccessor, DocumentMutator};
use crate::remediation::Remediator;
use crate::scanner::{ScanScope, Scanner};

/// Owns the document and the scanner. Requests are handled one at a time,
/// which makes scans single-flight.
pub struct Session<D> {
    document: D,
    scanner: Scanner,
}

impl<D: DocumentAccessor + DocumentMutator> Session<D> {
    pub fn new(document: D, config: DesignLintConfig) -> Self {
        Self {
            document,
            scanner: Scanner::new(config),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.scanner = self.scanner.with_events(events);
        self
    }

    pub fn with_scanner(mut self, scanner: Scanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    /// Token a host can trip to abort the scan in flight.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.scanner.cancellation_token().clone()
    }

    /// First message sent when the presentation layer opens.
    pub fn init(&self) -> Response {
        let selection_count = self
            .document
            .selection()
            .map(|s| s.len())
            .unwrap_or_default();
        let page_name = self
            .document
            .current_page()
            .and_then(|page| self.document.node(&page))
            .map(|page| page.name)
            .unwrap_or_default();
        Response::Init {
            selection_count,
            page_name,
        }
    }

    /// Handle one request. `None` means the request needs no reply.
    pub fn handle(&mut self, request: Request) -> Option<Response> {
        match request {
            Request::Scan { scope } => Some(self.scan(scope)),
            Request::ApplyTextStyle { node_id, style_id } => {
                let outcome = Remediator::for_scanner(&self.scanner).apply_text_style(
                    &mut self.document,
                    &node_id,
                    &style_id,
                );
                Some(match outcome {
                    Ok(()) => Response::notify("Text style applied"),
                    Err(e) => Response::notify_error(e.to_string()),
                })
            }
            Request::ApplyColorVariable {
                node_id,
                variable_id,
                property_path,
            } => {
                let outcome = Remediator::for_scanner(&self.scanner).apply_color_variable(
                    &mut self.document,
                    &node_id,
                    &variable_id,
                    &property_path,
                );
                Some(match outcome {
                    Ok(()) => Response::notify("Color variable applied"),
                    Err(e) => Response::notify_error(e.to_string()),
                })
            }
            Request::SelectNode { node_id } => match self.document.select_node(&node_id) {
                Ok(()) => None,
                Err(e) => Some(Response::notify_error(e.to_string())),
            },
        }
    }

    /// JSON in, JSON out.
    pub fn handle_json(&mut self, request: &str) -> Result<Option<String>, ProtocolError> {
        let request: Request = serde_json::from_str(request)?;
        match self.handle(request) {
            Some(response) => serde_json::to_string(&response)
                .map(Some)
                .map_err(ProtocolError::Encode),
            None => Ok(None),
        }
    }

    fn scan(&mut self, scope: ScanScope) -> Response {
        self.scanner.cancellation_token().reset();

        if scope == ScanScope::Selection {
            match self.document.selection() {
                Ok(selection) if selection.is_empty() => return Response::NoSelection,
                Ok(_) => {}
                Err(e) => {
                    return Response::ScanError {
                        code: e.error_code().to_string(),
                        message: e.to_string(),
                    }
                }
            }
        }

        match self.scanner.scan_scope(&self.document, scope) {
            Ok(report) => Response::ScanResults {
                findings: report.result,
                stats: report.stats,
            },
            Err(e) => Response::ScanError {
                code: e.error_code().to_string(),
                message: e.to_string(),
            },
        }
    }
}
