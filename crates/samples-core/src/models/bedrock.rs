//! Bedrock Agents action group payloads (function details flavour).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BedrockAgent {
    pub name: String,
    pub id: String,
    pub alias: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BedrockParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Invocation of an action group function by an agent
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BedrockFunctionRequest {
    pub message_version: String,
    pub agent: BedrockAgent,
    pub input_text: String,
    pub session_id: String,
    pub action_group: String,
    pub function: String,
    pub parameters: Vec<BedrockParameter>,
    pub session_attributes: HashMap<String, String>,
    pub prompt_session_attributes: HashMap<String, String>,
}

impl BedrockFunctionRequest {
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}

/// Tells the agent how to continue after a function result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseState {
    Failure,
    Reprompt,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextBody {
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResponseBody {
    #[serde(rename = "TEXT")]
    pub text: TextBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_state: Option<ResponseState>,
    pub response_body: ResponseBody,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDetailsResponse {
    pub action_group: String,
    pub function: String,
    pub function_response: FunctionResponse,
}

impl FunctionDetailsResponse {
    /// Empty-bodied result addressed to the requesting action group function
    pub fn for_request(request: &BedrockFunctionRequest) -> Self {
        Self {
            action_group: request.action_group.clone(),
            function: request.function.clone(),
            function_response: FunctionResponse::default(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.function_response.response_body.text.body = body.into();
        self
    }

    pub fn with_state(mut self, state: ResponseState) -> Self {
        self.function_response.response_state = Some(state);
        self
    }
}

/// Lambda result returned to the agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedrockFunctionResponse {
    pub message_version: String,
    pub response: FunctionDetailsResponse,
    pub session_attributes: HashMap<String, String>,
    pub prompt_session_attributes: HashMap<String, String>,
}

impl BedrockFunctionResponse {
    /// Wraps a result, carrying the request's version and session state over
    pub fn reply(request: &BedrockFunctionRequest, response: FunctionDetailsResponse) -> Self {
        Self {
            message_version: request.message_version.clone(),
            response,
            session_attributes: request.session_attributes.clone(),
            prompt_session_attributes: request.prompt_session_attributes.clone(),
        }
    }
}
