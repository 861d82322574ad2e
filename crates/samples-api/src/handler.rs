//! Generic adapter between API Gateway proxy requests and typed handlers.
//!
//! An implementor names the accepted method and where its input lives; the
//! adapter takes care of parsing, validation order, and the success and
//! failure envelopes, including CORS headers.

use crate::response;
use async_trait::async_trait;
use lambda_http::http::Method;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Request, RequestExt, Response};
use samples_core::{Invocation, SampleError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::time::Instant;

/// Where the handler's input is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// No input; the handler receives `Input::default()`
    None,
    Querystring,
    Path,
    Body,
}

#[async_trait]
pub trait ApiGatewayRequestHandler: Send + Sync {
    type Input: DeserializeOwned + Default + Send;
    type Output: Serialize + Send;

    /// Function name used in logs
    fn name(&self) -> &'static str;

    /// Accepted method, `None` accepts any
    fn method(&self) -> Option<Method>;

    fn request_type(&self) -> RequestType;

    async fn validate(&self, _input: &Self::Input) -> Result<(), SampleError> {
        Ok(())
    }

    async fn process(
        &self,
        input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError>;
}

/// Runs a request through the handler and builds the proxy response
#[tracing::instrument(
    name = "api_request",
    skip_all,
    fields(handler = handler.name(), method = %request.method(), path = request.uri().path())
)]
pub async fn handle_request<H>(handler: &H, request: Request) -> Response<Body>
where
    H: ApiGatewayRequestHandler + ?Sized,
{
    let started = Instant::now();
    let invocation = invocation_from_request(&request);

    let result = run_handler(handler, &request, &invocation).await;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match result {
        Ok(output) => {
            tracing::info!(
                request_id = %invocation.request_id,
                status = 200,
                elapsed_ms = elapsed_ms,
                "Request handled"
            );
            response::cors_json(&request, 200, &output)
        }
        Err(err) => {
            if err.is_client_error() {
                tracing::warn!(
                    request_id = %invocation.request_id,
                    status = err.status_code(),
                    error = %err,
                    "Request rejected"
                );
            } else {
                tracing::error!(
                    request_id = %invocation.request_id,
                    status = err.status_code(),
                    error = %err,
                    "Request failed"
                );
            }
            response::cors_error(&request, &err, &invocation.request_id)
        }
    }
}

async fn run_handler<H>(
    handler: &H,
    request: &Request,
    invocation: &Invocation,
) -> Result<H::Output, SampleError>
where
    H: ApiGatewayRequestHandler + ?Sized,
{
    if let Some(allowed) = handler.method()
        && *request.method() != allowed
    {
        return Err(SampleError::MethodNotAllowed {
            method: request.method().to_string(),
            allowed: allowed.to_string(),
        });
    }

    let input = parse_input::<H::Input>(handler.request_type(), request)?;
    handler.validate(&input).await?;
    handler.process(input, invocation).await
}

/// Deserializes the handler input from the part of the request it lives in
pub fn parse_input<T>(request_type: RequestType, request: &Request) -> Result<T, SampleError>
where
    T: DeserializeOwned + Default,
{
    match request_type {
        RequestType::None => Ok(T::default()),
        RequestType::Querystring => {
            let params = request.query_string_parameters();
            from_pairs(params.iter())
        }
        RequestType::Path => {
            let params = request.path_parameters();
            from_pairs(params.iter())
        }
        RequestType::Body => {
            let body = request.body().as_ref();
            if body.is_empty() {
                return Err(SampleError::Validation("No body contents".to_string()));
            }
            Ok(serde_json::from_slice(body)?)
        }
    }
}

fn from_pairs<'a, T, I>(pairs: I) -> Result<T, SampleError>
where
    T: DeserializeOwned,
    I: Iterator<Item = (&'a str, &'a str)>,
{
    let mut map = Map::new();
    for (key, value) in pairs {
        map.entry(key.to_string())
            .or_insert_with(|| Value::String(value.to_string()));
    }
    Ok(serde_json::from_value(Value::Object(map))?)
}

/// Per-invocation facts carried by the Lambda context and request context
pub fn invocation_from_request(request: &Request) -> Invocation {
    let invocation = request
        .lambda_context_ref()
        .map(Invocation::from_context)
        .unwrap_or_default();

    match connection_id(request) {
        Some(connection_id) => invocation.with_connection_id(connection_id),
        None => invocation,
    }
}

/// WebSocket connection id from the request context
pub fn connection_id(request: &Request) -> Option<String> {
    match request.request_context_ref()? {
        RequestContext::WebSocket(context) => context.connection_id.clone(),
        _ => None,
    }
}
