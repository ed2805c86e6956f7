//! Same-origin forwarder for backend API calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. `/api/<path>` is forwarded to
//! `<BACKEND_URL>/<path>` with method, query, body and end-to-end headers
//! preserved in both directions, so the client never needs CORS or the
//! backend's address. Backend statuses pass through unchanged; only transport
//! failures are turned into host errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::extract::rejection::{BytesRejection, FailedToBufferBody};
use axum::http::header::{CONTENT_LENGTH, HOST};
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Path prefix the client uses for backend calls.
pub const API_PREFIX: &str = "/api";

/// Header carrying the per-request correlation id to the backend.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Headers that describe a single connection and are never forwarded.
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "proxy-connection",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The request body exceeded `MAX_UPLOAD_BYTES`.
    #[error("request body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },

    /// The request body could not be read from the client.
    #[error("unreadable request body: {0}")]
    Body(String),

    /// The backend could not be reached or its response could not be read.
    #[error("backend unavailable: {0}")]
    Upstream(String),

    /// The backend did not answer within `BACKEND_TIMEOUT_SECS`.
    #[error("backend timed out")]
    Timeout,
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() { Self::Timeout } else { Self::Upstream(err.to_string()) }
    }

    /// Only the body limit is a 413; a client that breaks off mid-body is a 400.
    fn from_rejection(rejection: &BytesRejection, limit: usize) -> Self {
        match rejection {
            BytesRejection::FailedToBufferBody(FailedToBufferBody::LengthLimitError(_)) => {
                Self::BodyTooLarge { limit }
            }
            other => Self::Body(other.body_text()),
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// `true` for connection-scoped headers (RFC 9110 §7.6.1).
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// End-to-end headers from `headers`, minus `Host` and `Content-Length`,
/// which the outgoing client recomputes.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        if is_hop_by_hop(name) || name == HOST || name == CONTENT_LENGTH {
            continue;
        }
        out.append(name.clone(), value.clone());
    }
    out
}

/// Backend URL for a request to `uri_path` on this host.
///
/// `uri_path` is the raw (still percent-encoded) request path; the `/api`
/// prefix is removed and the remainder appended to `base`.
pub fn backend_url(base: &str, uri_path: &str, query: Option<&str>) -> String {
    let rest = uri_path.strip_prefix(API_PREFIX).unwrap_or(uri_path).trim_start_matches('/');
    let mut url = format!("{}/{rest}", base.trim_end_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Forward one `/api/*` request to the backend.
///
/// # Errors
///
/// [`ProxyError`] when the body is too large or unreadable, or the backend is
/// unreachable or slow. Backend error statuses are not errors here; they pass through.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    request_headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ProxyError> {
    let started = Instant::now();
    let body = body.map_err(|rejection| {
        let err = ProxyError::from_rejection(&rejection, state.config.max_upload_bytes);
        tracing::warn!(%method, path = %uri.path(), error = %err, "request body rejected");
        err
    })?;

    let request_id = uuid::Uuid::new_v4().to_string();
    let url = backend_url(&state.config.backend_url, uri.path(), uri.query());
    let mut headers = forwardable_headers(&request_headers);
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            let err = ProxyError::from_reqwest(&e);
            tracing::warn!(%request_id, method = %method, path = %uri.path(), error = %err, "forward failed");
            err
        })?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::from_reqwest(&e))?;

    tracing::info!(
        %request_id,
        method = %method,
        path = %uri.path(),
        status = status.as_u16(),
        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        "forwarded"
    );

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
