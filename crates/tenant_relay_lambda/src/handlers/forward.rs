use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{error, info};

use crate::adapters::queue::QueuePublisher;
use crate::adapters::trace::{AttributeValue, TraceContext};
use crate::runtime::contract::{
    OutboundMessage, APPLICATION_ID, APPLICATION_ID_ATTRIBUTE, TENANT_ID_ATTRIBUTE,
};
use crate::runtime::tenant::resolve_tenant;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Per-invocation facts supplied by the runtime rather than the event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationContext {
    pub request_id: String,
    pub received_at_ms: i64,
}

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("failed to serialize outbound message: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to publish tenant message: {0}")]
    Publish(String),
}

/// Forwards the request's tenant to the queue and echoes the published body.
///
/// Exactly one publish is attempted per call. A publish failure is returned
/// as-is so the invoking platform decides how to surface or retry it.
pub fn handle_forward_event(
    event: &Value,
    invocation: &InvocationContext,
    publisher: &dyn QueuePublisher,
    trace: &dyn TraceContext,
) -> Result<ApiGatewayResponse, ForwardError> {
    info!(
        component = "forward_handler",
        request_id = %invocation.request_id,
        event = %event,
        "request_received"
    );

    let tenant = resolve_tenant(event, invocation.received_at_ms);
    info!(
        component = "forward_handler",
        tenant_id = %tenant,
        derived = tenant.is_derived(),
        "tenant_resolved"
    );

    trace.set_attribute(TENANT_ID_ATTRIBUTE, AttributeValue::from(&tenant));
    trace.set_attribute(APPLICATION_ID_ATTRIBUTE, AttributeValue::from(APPLICATION_ID));

    let body = OutboundMessage::new(tenant).to_body()?;

    if let Err(message) = publisher.publish(&body) {
        error!(
            component = "forward_handler",
            request_id = %invocation.request_id,
            error = %message,
            "publish_failed"
        );
        return Err(ForwardError::Publish(message));
    }
    info!(component = "forward_handler", body = %body, "message_published");

    Ok(success_response(body))
}

fn success_response(body: String) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code: 200,
        headers: json!({"Content-Type": "application/json"}),
        body,
    }
}
