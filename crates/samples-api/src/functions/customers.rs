//! Customer registration publishing a versioned domain event.

use crate::handler::invocation_from_request;
use crate::response;
use lambda_http::{Body, Request, Response};
use samples_core::SampleError;
use samples_core::models::{CreateCustomerCommand, CustomerCreatedEvent, EventVersion};
use samples_core::services::EventPublisher;

/// Accepts a create-customer command; 201 once the event is published
pub async fn create_customer(
    publisher: &dyn EventPublisher,
    version: EventVersion,
    request: Request,
) -> Response<Body> {
    let command = match serde_json::from_slice::<CreateCustomerCommand>(request.body().as_ref()) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable create customer command");
            return response::empty(400);
        }
    };

    match handle_command(publisher, version, &command, &request).await {
        Ok(Some(customer_id)) => {
            tracing::info!(customer_id = %customer_id, "Customer created");
            response::empty(201)
        }
        Ok(None) => {
            tracing::info!("Command is invalid, returning");
            response::empty(400)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to publish customer created event");
            response::empty(e.status_code().max(500))
        }
    }
}

/// Publishes the event for a valid command and returns the new customer id
pub async fn handle_command(
    publisher: &dyn EventPublisher,
    version: EventVersion,
    command: &CreateCustomerCommand,
    request: &Request,
) -> Result<Option<String>, SampleError> {
    if !command.is_valid() {
        return Ok(None);
    }

    let customer_id = uuid::Uuid::new_v4().to_string();
    let event = CustomerCreatedEvent::build(version, &customer_id, command);
    tracing::info!(
        customer_id = %customer_id,
        event_type = event.type_name(),
        "Publishing customer created event"
    );

    let invocation = invocation_from_request(request);
    invocation
        .deadline
        .run("publish_customer_created", publisher.publish(&event))
        .await?;

    Ok(Some(customer_id))
}
