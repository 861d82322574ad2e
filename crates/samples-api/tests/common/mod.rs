//! Request builders and failing service stubs for the API integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use lambda_http::aws_lambda_events::apigw::ApiGatewayWebsocketProxyRequestContext;
use lambda_http::http::{self, Method};
use lambda_http::request::RequestContext;
use lambda_http::{Body, Context, Request, RequestExt, Response};
use samples_core::SampleError;
use samples_core::models::{CustomerCreatedEvent, Employee, Product, ProductWrapper, UpsertResult};
use samples_core::services::{EventPublisher, ItemRepository, ProductsDao};
use std::collections::HashMap;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const API_HOST: &str = "api.example.com";

/// Request with an optional JSON body
pub fn request(method: Method, path: &str, body: Option<&str>) -> Request {
    let body = match body {
        Some(text) => Body::Text(text.to_string()),
        None => Body::Empty,
    };

    http::Request::builder()
        .method(method)
        .uri(format!("https://{}{}", API_HOST, path))
        .header("host", API_HOST)
        .body(body)
        .unwrap()
}

pub fn with_path(request: Request, name: &str, value: &str) -> Request {
    request.with_path_parameters(HashMap::from([(name.to_string(), value.to_string())]))
}

pub fn with_query(request: Request, name: &str, value: &str) -> Request {
    request.with_query_string_parameters(HashMap::from([(
        name.to_string(),
        vec![value.to_string()],
    )]))
}

/// WebSocket route request carrying a connection id in its request context
pub fn websocket_request(connection_id: &str) -> Request {
    let mut context = ApiGatewayWebsocketProxyRequestContext::default();
    context.connection_id = Some(connection_id.to_string());
    request(Method::POST, "/", None).with_request_context(RequestContext::WebSocket(context))
}

/// Attaches a Lambda context whose deadline is `remaining` from now
pub fn with_deadline(request: Request, request_id: &str, remaining: Duration) -> Request {
    let deadline = SystemTime::now() + remaining;
    let mut context = Context::default();
    context.request_id = request_id.to_string();
    context.deadline = deadline
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;
    request.with_lambda_context(context)
}

pub fn body_text(response: &Response<Body>) -> String {
    String::from_utf8_lossy(response.body().as_ref()).into_owned()
}

pub fn body_json(response: &Response<Body>) -> serde_json::Value {
    serde_json::from_slice(response.body().as_ref()).unwrap()
}

/// DAO whose every call fails
pub struct FailingProducts;

#[async_trait]
impl ProductsDao for FailingProducts {
    async fn get_product(&self, _id: &str) -> Result<Option<Product>, SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }

    async fn put_product(&self, _product: &Product) -> Result<UpsertResult, SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }

    async fn delete_product(&self, _id: &str) -> Result<(), SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }

    async fn get_all_products(&self) -> Result<ProductWrapper, SampleError> {
        Err(SampleError::Repository("table unavailable".to_string()))
    }
}

/// DAO whose calls never finish inside a test deadline
pub struct SlowProducts;

impl SlowProducts {
    pub async fn stall() {
        tokio::time::sleep(Duration::from_secs(30)).await;
    }
}

#[async_trait]
impl ProductsDao for SlowProducts {
    async fn get_product(&self, _id: &str) -> Result<Option<Product>, SampleError> {
        Self::stall().await;
        Ok(None)
    }

    async fn put_product(&self, _product: &Product) -> Result<UpsertResult, SampleError> {
        Self::stall().await;
        Ok(UpsertResult::Inserted)
    }

    async fn delete_product(&self, _id: &str) -> Result<(), SampleError> {
        Self::stall().await;
        Ok(())
    }

    async fn get_all_products(&self) -> Result<ProductWrapper, SampleError> {
        Self::stall().await;
        Ok(ProductWrapper::new(Vec::new()))
    }
}

/// Employee table whose calls never finish inside a test deadline
pub struct SlowEmployees;

#[async_trait]
impl ItemRepository<Employee> for SlowEmployees {
    async fn get_item(&self, _id: &str) -> Result<Option<Employee>, SampleError> {
        SlowProducts::stall().await;
        Ok(None)
    }

    async fn put_item(&self, _record: &Employee) -> Result<UpsertResult, SampleError> {
        SlowProducts::stall().await;
        Ok(UpsertResult::Inserted)
    }

    async fn delete_item(&self, _id: &str) -> Result<bool, SampleError> {
        SlowProducts::stall().await;
        Ok(true)
    }
}

/// Event bus that never acknowledges inside a test deadline
pub struct SlowPublisher;

#[async_trait]
impl EventPublisher for SlowPublisher {
    async fn publish(&self, _event: &CustomerCreatedEvent) -> Result<(), SampleError> {
        SlowProducts::stall().await;
        Ok(())
    }
}
