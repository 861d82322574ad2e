/// Samples Core - Shared library for the serverless samples
///
/// This crate contains the domain records, event envelopes, repositories and
/// AWS service wrappers used by the API and worker Lambda functions.
pub mod constants;
pub mod deadline;
pub mod error;
pub mod models;
pub mod services;
pub mod telemetry;
pub mod utils;

// Re-export commonly used types
pub use deadline::{Deadline, Invocation};
pub use error::SampleError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
