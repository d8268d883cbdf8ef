// src/logging_middleware.rs
//! Request and response body logging at debug level

use axum::body::{to_bytes, Body, Bytes};
use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use serde_json::Value;
use tracing::{debug, Level};

/// Longest body excerpt written to the log
const MAX_LOGGED_BODY: usize = 2048;

/// Fields whose values are never logged (base64 resume uploads)
const REDACTED_FIELDS: [&str; 1] = ["file_data"];

/// Renders a body for the log: JSON with redacted fields, else UTF-8 text.
/// Binary bodies (resume downloads) yield `None`.
fn body_preview(bytes: &Bytes) -> Option<String> {
    let text = std::str::from_utf8(bytes).ok()?;

    let rendered = match serde_json::from_str::<Value>(text) {
        Ok(mut json) => {
            if let Value::Object(map) = &mut json {
                for field in REDACTED_FIELDS {
                    if let Some(value) = map.get_mut(field) {
                        *value = Value::String("<redacted>".to_string());
                    }
                }
            }
            json.to_string()
        }
        Err(_) => text.to_string(),
    };

    if rendered.len() <= MAX_LOGGED_BODY {
        return Some(rendered);
    }

    let mut end = MAX_LOGGED_BODY;
    while !rendered.is_char_boundary(end) {
        end -= 1;
    }
    Some(format!("{}... ({} bytes)", &rendered[..end], rendered.len()))
}

/// Logs request and response bodies when debug logging is on; otherwise
/// passes the request through without buffering
pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    if !tracing::enabled!(Level::DEBUG) {
        return Ok(next.run(request).await);
    }

    let (parts, body) = request.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(preview) = body_preview(&bytes).filter(|p| !p.is_empty()) {
        debug!(method = %parts.method, uri = %parts.uri, request_body = %preview, "Request");
    }

    let response = next.run(Request::from_parts(parts, Body::from(bytes))).await;

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if let Some(preview) = body_preview(&bytes).filter(|p| !p.is_empty()) {
        debug!(status = %parts.status, response_body = %preview, "Response");
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
