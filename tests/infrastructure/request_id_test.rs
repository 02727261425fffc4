use axum::http::{HeaderMap, HeaderValue};

use voicedesk::infrastructure::observability::{REQUEST_ID_HEADER, RequestId, resolve_request_id};

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[test]
fn given_incoming_id_when_resolving_then_reuses_it() {
    let mut headers = HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("front-desk-42"));

    assert_eq!(resolve_request_id(&headers), "front-desk-42");
}

#[test]
fn given_no_incoming_id_when_resolving_then_generates_uuid() {
    let id = resolve_request_id(&HeaderMap::new());

    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

#[test]
fn given_oversized_incoming_id_when_resolving_then_generates_fresh_one() {
    let mut headers = HeaderMap::new();
    let long = "x".repeat(500);
    headers.insert(REQUEST_ID_HEADER, HeaderValue::from_str(&long).unwrap());

    let id = resolve_request_id(&headers);

    assert_ne!(id, long);
    assert!(uuid::Uuid::parse_str(&id).is_ok());
}

#[test]
fn given_request_id_when_cloned_then_equals_original() {
    let original = RequestId("abc".to_string());
    let cloned = original.clone();
    assert_eq!(original.0, cloned.0);
}
