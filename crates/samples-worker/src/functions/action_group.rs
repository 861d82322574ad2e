//! Nutrition facts action group for the chatbot agent.

use crate::bedrock::BedrockEventHandler;
use async_trait::async_trait;
use samples_core::models::{BedrockFunctionRequest, FunctionDetailsResponse};
use samples_core::{Invocation, SampleError};

pub const FAT_PER_SERVING: &str = "Chicken has 20 gm of fat per serving. Shrimp has 30 gm of fat per serving. Beef has 50 gm of fat per serving";

/// Answers every agent question with the fat content table
pub struct ActionGroupFunction;

#[async_trait]
impl BedrockEventHandler for ActionGroupFunction {
    fn name(&self) -> &'static str {
        "action_group"
    }

    async fn process(
        &self,
        request: &BedrockFunctionRequest,
        _invocation: &Invocation,
    ) -> Result<FunctionDetailsResponse, SampleError> {
        Ok(FunctionDetailsResponse::for_request(request).with_body(FAT_PER_SERVING))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_fat_table() {
        let request = BedrockFunctionRequest {
            action_group: "nutrition".to_string(),
            function: "fat_per_serving".to_string(),
            ..Default::default()
        };

        assert!(ActionGroupFunction.validate(&request).await.is_ok());

        let details = ActionGroupFunction
            .process(&request, &Invocation::default())
            .await
            .unwrap();
        assert_eq!(details.action_group, "nutrition");
        assert_eq!(details.function, "fat_per_serving");
        assert_eq!(details.function_response.response_body.text.body, FAT_PER_SERVING);
        assert!(details.function_response.response_state.is_none());
    }
}
