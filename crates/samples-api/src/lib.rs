/// Samples API - API Gateway Lambda functions
///
/// Each binary under `src/bin` wires one function from `functions` to the
/// Lambda HTTP runtime. REST and WebSocket routes both arrive as proxy
/// requests and share the response builders in `response`.
pub mod context;
pub mod functions;
pub mod handler;
pub mod middleware;
pub mod response;

pub use context::ApiContext;
pub use handler::{ApiGatewayRequestHandler, RequestType, handle_request};
pub use samples_core::*;
