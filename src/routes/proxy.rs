//! `/api/*` reverse proxy to the leads service.
//!
//! Method, query string, body and a small set of request headers are passed
//! through. The upstream status and body come back verbatim, so a 403 from
//! the service reaches the browser unchanged and drives the re-login flow.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Request headers copied to the upstream call.
static FORWARDED_REQUEST_HEADERS: [HeaderName; 3] = [header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
static FORWARDED_RESPONSE_HEADERS: [HeaderName; 2] = [header::CONTENT_TYPE, header::CACHE_CONTROL];

/// Join the upstream base with the captured path and optional query.
///
/// The captured path arrives percent-decoded. `None` when any segment is `.`
/// or `..`, which would let a caller climb out of the upstream base.
pub(crate) fn upstream_url(base: &str, path: &str, query: Option<&str>) -> Option<String> {
    if path.split(['/', '\\']).any(|segment| segment == "." || segment == "..") {
        return None;
    }
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    Some(url)
}

/// Copy only the allow-listed headers from `source`.
pub(crate) fn select_headers(source: &HeaderMap, allowed: &[HeaderName]) -> HeaderMap {
    let mut selected = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            selected.append(name.clone(), value.clone());
        }
    }
    selected
}

/// `ANY /api/{*path}`: forward to `{upstream}/{path}`.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(url) = upstream_url(&state.upstream, &path, query.as_deref()) else {
        tracing::warn!(%method, %path, "rejected proxy path with dot segments");
        return error_response(StatusCode::BAD_REQUEST, "invalid api path");
    };
    let request = state
        .http
        .request(method.clone(), &url)
        .headers(select_headers(&headers, &FORWARDED_REQUEST_HEADERS))
        .body(body);

    let upstream = match request.send().await {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "upstream request failed");
            return error_response(StatusCode::BAD_GATEWAY, "leads service unreachable");
        }
    };

    let status = upstream.status();
    let response_headers = select_headers(upstream.headers(), &FORWARDED_RESPONSE_HEADERS);
    match upstream.bytes().await {
        Ok(bytes) => {
            if status.is_server_error() {
                tracing::warn!(%status, %method, %url, "upstream returned server error");
            } else {
                tracing::debug!(%status, %method, %url, "proxied");
            }
            (status, response_headers, bytes).into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, %method, %url, "failed to read upstream body");
            error_response(StatusCode::BAD_GATEWAY, "leads service response interrupted")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
