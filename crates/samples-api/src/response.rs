//! Response builders shared by the HTTP functions.

use lambda_http::http::header::{HeaderName, HeaderValue};
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Request, Response};
use samples_core::SampleError;
use serde::Serialize;
use serde_json::json;

pub const CONTENT_TYPE_JSON: &str = "application/json";
pub const CONTENT_TYPE_TEXT: &str = "text/plain";

/// Builds a response, skipping headers whose values are not valid header text
pub fn build(status: u16, headers: &[(&str, &str)], body: Body) -> Response<Body> {
    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    for (name, value) in headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                response.headers_mut().insert(name, value);
            }
            _ => tracing::warn!(header = *name, "Dropping invalid response header"),
        }
    }

    response
}

pub fn text(status: u16, body: impl Into<String>) -> Response<Body> {
    build(status, &[("Content-Type", CONTENT_TYPE_TEXT)], Body::Text(body.into()))
}

pub fn json<T: Serialize>(status: u16, value: &T) -> Response<Body> {
    match serde_json::to_string(value) {
        Ok(body) => build(status, &[("Content-Type", CONTENT_TYPE_JSON)], Body::Text(body)),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize response");
            text(500, "Internal Server Error")
        }
    }
}

pub fn empty(status: u16) -> Response<Body> {
    build(status, &[], Body::Empty)
}

/// 405 with the `Allow` header naming the single accepted method
pub fn method_not_allowed(allowed: &Method, message: &str) -> Response<Body> {
    build(
        405,
        &[("Content-Type", CONTENT_TYPE_TEXT), ("Allow", allowed.as_str())],
        Body::Text(message.to_string()),
    )
}

/// Value for `Access-Control-Allow-Origin`: the caller's origin, or `*`
pub fn allowed_origin(request: &Request) -> String {
    request
        .headers()
        .get("origin")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("*")
        .to_string()
}

pub fn cors_json<T: Serialize>(request: &Request, status: u16, value: &T) -> Response<Body> {
    let origin = allowed_origin(request);
    match serde_json::to_string(value) {
        Ok(body) => build(
            status,
            &[
                ("Content-Type", CONTENT_TYPE_JSON),
                ("Access-Control-Allow-Origin", &origin),
                ("Access-Control-Allow-Credentials", "true"),
            ],
            Body::Text(body),
        ),
        Err(e) => cors_error(
            request,
            &SampleError::Internal(format!("Failed to serialize response: {}", e)),
            "",
        ),
    }
}

/// Error envelope returned by the generic request handler
pub fn cors_error(request: &Request, err: &SampleError, request_id: &str) -> Response<Body> {
    let origin = allowed_origin(request);
    let status = err.status_code();

    let body = json!({
        "errorType": err.error_type(),
        "httpStatus": status,
        "errorMessage": err.to_string(),
        "requestId": request_id,
    });

    let mut headers = vec![
        ("Content-Type", CONTENT_TYPE_JSON),
        ("Access-Control-Allow-Origin", origin.as_str()),
        ("Access-Control-Allow-Credentials", "true"),
        ("X-Amzn-ErrorType", err.error_type()),
    ];
    if let SampleError::MethodNotAllowed { allowed, .. } = err {
        headers.push(("Allow", allowed.as_str()));
    }

    build(status, &headers, Body::Text(body.to_string()))
}

/// Header value as text, if present
pub fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}
