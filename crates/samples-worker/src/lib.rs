/// Samples Worker - event-driven Lambda functions
///
/// Batch handlers for SQS and Kinesis report partial failures; S3 handlers
/// fail the whole invocation so the event lands in the dead-letter queue.
/// Bedrock agent handlers report failures inside their reply.
pub mod bedrock;
pub mod context;
pub mod functions;
pub mod kinesis;
pub mod sqs;

pub use bedrock::{BedrockEventHandler, handle_bedrock_event};
pub use context::WorkerContext;
pub use kinesis::{KinesisEventHandler, handle_kinesis_event};
pub use samples_core::*;
pub use sqs::{SqsEventHandler, handle_sqs_event};
