//! Employee records arriving on a queue or a stream.

use crate::kinesis::KinesisEventHandler;
use crate::sqs::SqsEventHandler;
use async_trait::async_trait;
use samples_core::models::{Employee, SqsRecord};
use samples_core::services::EmployeeRepository;
use samples_core::utils::{redact_email, require_non_blank};
use samples_core::{Invocation, SampleError};
use std::sync::Arc;

async fn store(
    repository: &EmployeeRepository,
    employee: &Employee,
    invocation: &Invocation,
) -> Result<(), SampleError> {
    let result = invocation
        .deadline
        .run("put_employee", repository.put_item(employee))
        .await?;

    tracing::info!(
        employee_id = %employee.employee_id,
        email = %redact_email(&employee.email),
        result = %result,
        "Employee stored"
    );
    Ok(())
}

pub struct ProcessEmployeeSqs {
    repository: Arc<EmployeeRepository>,
}

impl ProcessEmployeeSqs {
    pub fn new(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SqsEventHandler for ProcessEmployeeSqs {
    type Message = Employee;

    fn name(&self) -> &'static str {
        "employee_sqs"
    }

    async fn process_message(
        &self,
        message: Employee,
        _record: &SqsRecord,
        invocation: &Invocation,
    ) -> Result<(), SampleError> {
        require_non_blank(&message.employee_id, "employee_id")?;
        store(self.repository.as_ref(), &message, invocation).await
    }
}

pub struct ProcessEmployeeKinesis {
    repository: Arc<EmployeeRepository>,
}

impl ProcessEmployeeKinesis {
    pub fn new(repository: Arc<EmployeeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl KinesisEventHandler for ProcessEmployeeKinesis {
    type Record = Employee;

    fn name(&self) -> &'static str {
        "employee_kinesis"
    }

    async fn validate_record(&self, record: &Employee) -> Result<(), SampleError> {
        require_non_blank(&record.employee_id, "employee_id")
    }

    async fn process_record(
        &self,
        record: Employee,
        invocation: &Invocation,
    ) -> Result<(), SampleError> {
        store(self.repository.as_ref(), &record, invocation).await
    }
}
