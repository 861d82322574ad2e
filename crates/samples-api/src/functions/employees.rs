//! Employee lookups and upserts behind the generic request handler.

use crate::handler::{ApiGatewayRequestHandler, RequestType};
use async_trait::async_trait;
use lambda_http::http::Method;
use samples_core::models::{Employee, UpsertResult};
use samples_core::services::EmployeeRepository;
use samples_core::utils::require_non_blank;
use samples_core::{Invocation, SampleError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Default, Deserialize)]
pub struct GetEmployeeRequest {
    #[serde(default)]
    pub employee_id: String,
}

#[derive(Debug, Serialize)]
pub struct GetEmployeeResponse {
    pub employee: Employee,
}

pub struct GetEmployee {
    repository: Arc<EmployeeRepository>,
}

impl GetEmployee {
    pub fn new(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ApiGatewayRequestHandler for GetEmployee {
    type Input = GetEmployeeRequest;
    type Output = GetEmployeeResponse;

    fn name(&self) -> &'static str {
        "get_employee"
    }

    fn method(&self) -> Option<Method> {
        Some(Method::GET)
    }

    fn request_type(&self) -> RequestType {
        RequestType::Querystring
    }

    async fn validate(&self, input: &Self::Input) -> Result<(), SampleError> {
        require_non_blank(&input.employee_id, "employee_id")
    }

    async fn process(
        &self,
        input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError> {
        let employee = invocation
            .deadline
            .run("get_employee", self.repository.get_item(&input.employee_id))
            .await?
            .ok_or_else(|| {
                SampleError::NotFound(format!("Employee {} not found", input.employee_id))
            })?;

        Ok(GetEmployeeResponse { employee })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PutEmployeeRequest {
    #[serde(default)]
    pub employee: Option<Employee>,
}

#[derive(Debug, Serialize)]
pub struct PutEmployeeResponse {
    pub employee_id: String,
    pub result: UpsertResult,
}

pub struct PutEmployee {
    repository: Arc<EmployeeRepository>,
}

impl PutEmployee {
    pub fn new(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ApiGatewayRequestHandler for PutEmployee {
    type Input = PutEmployeeRequest;
    type Output = PutEmployeeResponse;

    fn name(&self) -> &'static str {
        "put_employee"
    }

    fn method(&self) -> Option<Method> {
        Some(Method::PUT)
    }

    fn request_type(&self) -> RequestType {
        RequestType::Body
    }

    async fn validate(&self, input: &Self::Input) -> Result<(), SampleError> {
        let employee = input
            .employee
            .as_ref()
            .ok_or_else(|| SampleError::Validation("'employee' cannot be null".to_string()))?;

        if !employee.has_id() {
            return Err(SampleError::Validation(
                "Invalid 'employee_id'.".to_string(),
            ));
        }
        Ok(())
    }

    async fn process(
        &self,
        input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError> {
        let employee = input
            .employee
            .ok_or_else(|| SampleError::Validation("'employee' cannot be null".to_string()))?;

        let result = invocation
            .deadline
            .run("put_employee", self.repository.put_item(&employee))
            .await?;

        tracing::info!(employee_id = %employee.employee_id, result = %result, "Employee stored");

        Ok(PutEmployeeResponse {
            employee_id: employee.employee_id,
            result,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct GetHealthRequest {}

#[derive(Debug, Serialize)]
pub struct GetHealthResponse {
    pub aws_request_id: String,
    pub function_name: String,
    pub function_version: String,
}

/// Echoes the invocation identity; no downstream calls
pub struct GetHealth;

#[async_trait]
impl ApiGatewayRequestHandler for GetHealth {
    type Input = GetHealthRequest;
    type Output = GetHealthResponse;

    fn name(&self) -> &'static str {
        "get_health"
    }

    fn method(&self) -> Option<Method> {
        Some(Method::GET)
    }

    fn request_type(&self) -> RequestType {
        RequestType::None
    }

    async fn process(
        &self,
        _input: Self::Input,
        invocation: &Invocation,
    ) -> Result<Self::Output, SampleError> {
        Ok(GetHealthResponse {
            aws_request_id: invocation.request_id.clone(),
            function_name: invocation.function_name.clone(),
            function_version: invocation.function_version.clone(),
        })
    }
}
