//! Product CRUD functions for an HTTP API.
//!
//! These answer with plain-text bodies and bare status codes rather than the
//! generic JSON envelope, so they do their own method and parameter checks.

use crate::handler::invocation_from_request;
use crate::response::{self, method_not_allowed};
use lambda_http::http::Method;
use lambda_http::{Body, Request, RequestExt, Response};
use samples_core::SampleError;
use samples_core::models::{Product, UpsertResult};
use samples_core::services::ProductsDao;
use serde::Deserialize;

/// Product payload of a PUT; the id may be omitted in favour of the path
#[derive(Debug, Deserialize)]
struct ProductBody {
    #[serde(default)]
    id: Option<String>,
    name: String,
    price: f64,
}

fn path_id(request: &Request) -> Option<String> {
    request
        .path_parameters()
        .first("id")
        .map(|id| id.to_string())
}

/// Maps a DAO failure to a bodiless response tagged with the error type
fn failure(err: &SampleError, operation: &str) -> Response<Body> {
    let status = match err {
        SampleError::Timeout(_) => {
            tracing::error!(operation = operation, error = %err, "Product operation timed out");
            503
        }
        _ => {
            tracing::error!(operation = operation, error = %err, "Product operation failed");
            500
        }
    };
    response::build(status, &[("X-Amzn-ErrorType", err.error_type())], Body::Empty)
}

pub async fn get_products(dao: &dyn ProductsDao, request: Request) -> Response<Body> {
    if *request.method() != Method::GET {
        return method_not_allowed(&Method::GET, "Only GET allowed");
    }

    let invocation = invocation_from_request(&request);
    match invocation
        .deadline
        .run("get_all_products", dao.get_all_products())
        .await
    {
        Ok(products) => response::json(200, &products),
        Err(e) => failure(&e, "get_all_products"),
    }
}

pub async fn get_product(dao: &dyn ProductsDao, request: Request) -> Response<Body> {
    if *request.method() != Method::GET {
        return method_not_allowed(&Method::GET, "Only GET allowed");
    }

    let Some(id) = path_id(&request) else {
        return response::text(404, "Product not found");
    };

    let invocation = invocation_from_request(&request);
    match invocation.deadline.run("get_product", dao.get_product(&id)).await {
        Ok(Some(product)) => response::json(200, &product),
        Ok(None) => {
            tracing::info!(product_id = %id, "Product not found");
            response::text(404, "Product not found")
        }
        Err(e) => failure(&e, "get_product"),
    }
}

pub async fn put_product(dao: &dyn ProductsDao, request: Request) -> Response<Body> {
    if *request.method() != Method::PUT {
        return method_not_allowed(&Method::PUT, "Only PUT allowed");
    }

    if request.body().as_ref().is_empty() {
        return response::text(400, "No body contents");
    }

    let Some(id) = path_id(&request) else {
        return response::empty(400);
    };

    let body = match serde_json::from_slice::<ProductBody>(request.body().as_ref()) {
        Ok(body) if body.id.as_deref().is_none_or(|body_id| body_id.is_empty() || body_id == id) => {
            body
        }
        Ok(_) | Err(_) => {
            return response::text(400, "Product ID in the body does not match path parameter");
        }
    };

    let product = Product::new(id.clone(), body.name, body.price);
    let invocation = invocation_from_request(&request);

    match invocation
        .deadline
        .run("put_product", dao.put_product(&product))
        .await
    {
        Ok(UpsertResult::Inserted) => {
            let location = location(&request);
            response::build(
                201,
                &[
                    ("Content-Type", response::CONTENT_TYPE_TEXT),
                    ("Location", &location),
                ],
                Body::Text(format!("Created product with id {}", id)),
            )
        }
        Ok(UpsertResult::Updated) => response::text(200, format!("Updated product with id {}", id)),
        Err(e) => failure(&e, "put_product"),
    }
}

pub async fn delete_product(dao: &dyn ProductsDao, request: Request) -> Response<Body> {
    if *request.method() != Method::DELETE {
        return method_not_allowed(&Method::DELETE, "Only DELETE allowed");
    }

    // Deleting nothing is still a successful delete
    let Some(id) = path_id(&request) else {
        return response::empty(204);
    };

    let invocation = invocation_from_request(&request);
    match invocation
        .deadline
        .run("delete_product", dao.delete_product(&id))
        .await
    {
        Ok(()) => response::text(200, format!("Product with id {} deleted", id)),
        Err(e @ SampleError::Timeout(_)) => {
            tracing::error!(operation = "delete_product", error = %e, "Product operation timed out");
            response::build(
                503,
                &[
                    ("Content-Type", response::CONTENT_TYPE_TEXT),
                    ("X-Amzn-ErrorType", e.error_type()),
                ],
                Body::Text("Timed Out".to_string()),
            )
        }
        Err(e) => failure(&e, "delete_product"),
    }
}

/// `https://{host}{path}` of the request that created the product
fn location(request: &Request) -> String {
    let host = request
        .uri()
        .host()
        .or_else(|| response::header(request, "host"))
        .unwrap_or_default();

    format!("https://{}{}", host, request.uri().path())
}
