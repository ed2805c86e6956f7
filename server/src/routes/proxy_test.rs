use super::*;

// =============================================================================
// backend_url
// =============================================================================

#[test]
fn backend_url_strips_api_prefix() {
    assert_eq!(backend_url("http://b:7777", "/api/resume/stats", None), "http://b:7777/resume/stats");
}

#[test]
fn backend_url_keeps_query() {
    assert_eq!(
        backend_url("http://b:7777", "/api/user/profile", Some("a=1&b=two")),
        "http://b:7777/user/profile?a=1&b=two"
    );
}

#[test]
fn backend_url_ignores_empty_query() {
    assert_eq!(backend_url("http://b:7777", "/api/login", Some("")), "http://b:7777/login");
}

#[test]
fn backend_url_does_not_double_slashes() {
    assert_eq!(backend_url("http://b:7777/", "/api//login", None), "http://b:7777/login");
}

#[test]
fn backend_url_preserves_encoded_segments() {
    assert_eq!(backend_url("http://b", "/api/files/a%2Fb", None), "http://b/files/a%2Fb");
}

// =============================================================================
// header filtering
// =============================================================================

#[test]
fn hop_by_hop_headers_are_recognized() {
    for name in ["connection", "keep-alive", "transfer-encoding", "upgrade", "te", "trailer"] {
        assert!(is_hop_by_hop(&HeaderName::from_static(name)), "{name} is hop-by-hop");
    }
    assert!(!is_hop_by_hop(&HeaderName::from_static("authorization")));
    assert!(!is_hop_by_hop(&HeaderName::from_static("content-type")));
}

#[test]
fn forwardable_headers_drop_hop_by_hop_host_and_length() {
    let mut headers = HeaderMap::new();
    headers.insert("authorization", HeaderValue::from_static("Bearer abc123"));
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers.insert("connection", HeaderValue::from_static("keep-alive"));
    headers.insert("host", HeaderValue::from_static("localhost:3000"));
    headers.insert("content-length", HeaderValue::from_static("12"));

    let out = forwardable_headers(&headers);
    assert_eq!(out.len(), 2);
    assert_eq!(out.get("authorization").unwrap(), "Bearer abc123");
    assert_eq!(out.get("content-type").unwrap(), "application/json");
}

#[test]
fn forwardable_headers_keep_repeated_values() {
    let mut headers = HeaderMap::new();
    headers.append("set-cookie", HeaderValue::from_static("a=1"));
    headers.append("set-cookie", HeaderValue::from_static("b=2"));
    let out = forwardable_headers(&headers);
    assert_eq!(out.get_all("set-cookie").iter().count(), 2);
}

// =============================================================================
// ProxyError
// =============================================================================

#[test]
fn proxy_errors_map_to_gateway_statuses() {
    assert_eq!(ProxyError::BodyTooLarge { limit: 1 }.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(ProxyError::Upstream("refused".into()).status(), StatusCode::BAD_GATEWAY);
    assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(ProxyError::Body("stream closed".into()).status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn length_limit_rejection_is_payload_too_large() {
    use axum::extract::{FromRequest, Request};

    // Without a layer the extractor applies axum's 2 MiB default.
    let req = Request::new(Body::from(vec![b'x'; 2 * 1024 * 1024 + 1]));
    let rejection = Bytes::from_request(req, &()).await.unwrap_err();
    let err = ProxyError::from_rejection(&rejection, 64);
    assert!(matches!(err, ProxyError::BodyTooLarge { limit: 64 }), "{err:?}");
}

#[tokio::test]
async fn proxy_error_response_is_json() {
    let response = ProxyError::Upstream("connection refused".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["error"], "backend unavailable: connection refused");
}

#[tokio::test]
async fn unreadable_body_response_is_bad_request_json() {
    let response = ProxyError::Body("connection reset".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["error"], "unreadable request body: connection reset");
}
