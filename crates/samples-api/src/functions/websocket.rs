//! WebSocket `$connect` and `$disconnect` routes.

use crate::handler::{ApiGatewayRequestHandler, RequestType};
use async_trait::async_trait;
use lambda_http::http::Method;
use samples_core::models::Connection;
use samples_core::services::ConnectionRepository;
use samples_core::{Invocation, SampleError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct ConnectionRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionResponse {
    pub connection_id: String,
    pub result: String,
}

fn require_connection_id(invocation: &Invocation) -> Result<String, SampleError> {
    invocation
        .connection_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| {
            SampleError::Validation("Request has no WebSocket connection id".to_string())
        })
}

pub struct OnConnect {
    connections: Arc<ConnectionRepository>,
}

impl OnConnect {
    pub fn new(connections: Arc<ConnectionRepository>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ApiGatewayRequestHandler for OnConnect {
    type Input = ConnectionRequest;
    type Output = ConnectionResponse;

    fn name(&self) -> &'static str {
        "ws_on_connect"
    }

    fn method(&self) -> Option<Method> {
        None
    }

    fn request_type(&self) -> RequestType {
        RequestType::None
    }

    async fn process(
        &self,
        _input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError> {
        let connection_id = require_connection_id(invocation)?;
        let connection = Connection::new(connection_id.clone());

        let result = match invocation
            .deadline
            .run("put_connection", self.connections.put_item(&connection))
            .await
        {
            Ok(_) => "Connected",
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "Failed to store connection");
                "Failed"
            }
        };

        Ok(ConnectionResponse {
            connection_id,
            result: result.to_string(),
        })
    }
}

pub struct OnDisconnect {
    connections: Arc<ConnectionRepository>,
}

impl OnDisconnect {
    pub fn new(connections: Arc<ConnectionRepository>) -> Self {
        Self { connections }
    }
}

#[async_trait]
impl ApiGatewayRequestHandler for OnDisconnect {
    type Input = ConnectionRequest;
    type Output = ConnectionResponse;

    fn name(&self) -> &'static str {
        "ws_on_disconnect"
    }

    fn method(&self) -> Option<Method> {
        None
    }

    fn request_type(&self) -> RequestType {
        RequestType::None
    }

    async fn process(
        &self,
        _input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError> {
        let connection_id = require_connection_id(invocation)?;

        let result = match invocation
            .deadline
            .run("delete_connection", self.connections.delete_item(&connection_id))
            .await
        {
            Ok(true) => "Disconnected",
            Ok(false) => "Failed",
            Err(e) => {
                tracing::error!(connection_id = %connection_id, error = %e, "Failed to delete connection");
                "Failed"
            }
        };

        Ok(ConnectionResponse {
            connection_id,
            result: result.to_string(),
        })
    }
}
