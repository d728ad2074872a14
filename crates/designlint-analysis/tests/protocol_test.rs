//! JSON request/response handling through a `Session`.

mod common;

use common::*;
use designlint_analysis::document::{
    DocumentAccessor, InMemoryDocument, NodeData, NodeKind, SlotPath,
};
use designlint_analysis::protocol::{Request, Response, Session};
use designlint_analysis::ScanScope;
use designlint_core::config::DesignLintConfig;
use designlint_core::errors::ProtocolError;
use designlint_core::traits::Cancellable;
use designlint_core::types::NodeId;
use serde_json::Value;

fn session() -> Session<InMemoryDocument> {
    let (mut doc, page) = one_page();
    doc.append(&page, text("1:1", "Label", "Hello")).unwrap();
    doc.append(&page, rect("1:2", "Swatch", RED)).unwrap();
    doc.add_color_variable(variable("V:red", "red/500", RED));
    Session::new(doc, DesignLintConfig::default())
}

fn reply(session: &mut Session<InMemoryDocument>, request: &str) -> Value {
    let json = session
        .handle_json(request)
        .unwrap()
        .expect("request should produce a reply");
    serde_json::from_str(&json).unwrap()
}

#[test]
fn init_reports_selection_and_page() {
    let mut session = session();
    session.document_mut().set_selection(vec![NodeId::new("1:1")]);
    assert_eq!(
        session.init(),
        Response::Init {
            selection_count: 1,
            page_name: "Page 1".to_string()
        }
    );
}

#[test]
fn empty_selection_scan_replies_no_selection() {
    let mut session = session();
    let value = reply(&mut session, r#"{"type":"scan","scope":"selection"}"#);
    assert_eq!(value, serde_json::json!({ "type": "noSelection" }));
}

#[test]
fn page_scan_replies_with_camel_case_results() {
    let mut session = session();
    let value = reply(&mut session, r#"{"type":"scan","scope":"page"}"#);

    assert_eq!(value["type"], "scanResults");
    let findings = &value["findings"];
    assert_eq!(findings["summary"]["isEmpty"], false);
    assert_eq!(findings["summary"]["text"], 1);
    assert_eq!(findings["summary"]["color"], 1);
    assert_eq!(findings["text"][0]["nodeId"], "1:1");
    assert_eq!(findings["color"][0]["slot"], "fills/0");
    assert_eq!(findings["color"][0]["candidates"][0]["matchTier"], "exact");
    assert_eq!(findings["availableColorVariables"][0]["id"], "V:red");
    assert!(value["stats"]["nodesVisited"].is_number());
}

#[test]
fn apply_color_variable_notifies() {
    let mut session = session();
    let value = reply(
        &mut session,
        r#"{"type":"applyColorVariable","nodeId":"1:2","variableId":"V:red","propertyPath":"fills/0"}"#,
    );
    assert_eq!(value["type"], "notify");
    assert_eq!(value["error"], false);

    let node = session.document().node(&NodeId::new("1:2")).unwrap();
    assert!(node.bound_variables.is_bound(&SlotPath::fill(0)));
}

#[test]
fn failed_apply_is_an_error_notification() {
    let mut session = session();
    let response = session.handle(Request::ApplyTextStyle {
        node_id: NodeId::new("1:1"),
        style_id: "S:missing".into(),
    });
    match response {
        Some(Response::Notify { message, error }) => {
            assert!(error);
            assert!(message.contains("S:missing"));
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn select_node_has_no_reply() {
    let mut session = session();
    let out = session
        .handle_json(r#"{"type":"selectNode","nodeId":"1:2"}"#)
        .unwrap();
    assert!(out.is_none());
    assert_eq!(session.document().selected_node(), Some(&NodeId::new("1:2")));

    let missing = session.handle(Request::SelectNode {
        node_id: NodeId::new("9:9"),
    });
    assert!(matches!(missing, Some(Response::Notify { error: true, .. })));
}

#[test]
fn malformed_request_is_a_protocol_error() {
    let mut session = session();
    let err = session.handle_json(r#"{"type":"explode"}"#).unwrap_err();
    assert!(matches!(err, ProtocolError::MalformedRequest(_)));
}

#[test]
fn timed_out_scan_replies_with_error_code() {
    let (mut doc, page) = one_page();
    doc.append(&page, NodeData::new("1:1", NodeKind::Vector, "Shape"))
        .unwrap();
    let mut config = DesignLintConfig::default();
    config.scan.timeout_ms = Some(0);
    let mut session = Session::new(doc, config);

    match session.handle(Request::Scan {
        scope: ScanScope::Page,
    }) {
        Some(Response::ScanError { code, message }) => {
            assert_eq!(code, "SCAN_TIMEOUT");
            assert!(message.contains("smaller selection"));
        }
        other => panic!("unexpected response {other:?}"),
    }
}

#[test]
fn cancelled_token_is_reset_for_the_next_scan() {
    let mut session = session();
    session.cancellation_token().cancel();
    let response = session.handle(Request::Scan {
        scope: ScanScope::File,
    });
    assert!(matches!(response, Some(Response::ScanResults { .. })));
}
