//! Bedrock Agents action group invocations.
//!
//! The agent always expects a well-formed reply, so failures never surface as
//! Lambda errors; they become a `FAILURE` response state instead.

use async_trait::async_trait;
use samples_core::models::{
    BedrockFunctionRequest, BedrockFunctionResponse, FunctionDetailsResponse, ResponseState,
};
use samples_core::services::{Metrics, MetricsService};
use samples_core::{Invocation, SampleError};

#[async_trait]
pub trait BedrockEventHandler: Send + Sync {
    fn name(&self) -> &'static str;

    async fn validate(&self, _request: &BedrockFunctionRequest) -> Result<(), SampleError> {
        Ok(())
    }

    async fn process(
        &self,
        request: &BedrockFunctionRequest,
        invocation: &Invocation,
    ) -> Result<FunctionDetailsResponse, SampleError>;

    /// Result reported to the agent when validation or processing fails
    async fn handle_error(
        &self,
        request: &BedrockFunctionRequest,
        _error: &SampleError,
    ) -> FunctionDetailsResponse {
        FunctionDetailsResponse::for_request(request).with_state(ResponseState::Failure)
    }
}

/// Validates and processes one agent request
///
/// Message version and session attributes of the request are echoed back on
/// both outcomes.
pub async fn handle_bedrock_event<H>(
    handler: &H,
    request: BedrockFunctionRequest,
    invocation: &Invocation,
    metrics: &dyn MetricsService,
) -> BedrockFunctionResponse
where
    H: BedrockEventHandler + ?Sized,
{
    tracing::info!(
        function = handler.name(),
        action_group = %request.action_group,
        agent_function = %request.function,
        session_id = %request.session_id,
        "Received Bedrock agent event"
    );

    let result = match handler.validate(&request).await {
        Ok(()) => handler.process(&request, invocation).await,
        Err(e) => Err(e),
    };

    let details = match result {
        Ok(details) => details,
        Err(e) => {
            tracing::error!(
                function = handler.name(),
                action_group = %request.action_group,
                error = %e,
                "Failed to process Bedrock agent event"
            );
            Metrics::error_occurred(metrics, e.error_type(), handler.name()).await;
            handler.handle_error(&request, &e).await
        }
    };

    let response = BedrockFunctionResponse::reply(&request, details);
    tracing::info!(
        function = handler.name(),
        response_state = ?response.response.function_response.response_state,
        "Bedrock agent response ready"
    );
    response
}
