use chrono::Utc;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tenant_relay_lambda::adapters::queue::QueuePublisher;
use tenant_relay_lambda::config::RelayConfig;
use tenant_relay_lambda::handlers::forward::{
    handle_forward_event, ApiGatewayResponse, InvocationContext,
};
use tenant_relay_lambda::telemetry::{init_subscriber, invocation_span};

#[derive(Clone)]
struct SqsQueuePublisher {
    queue_url: String,
    sqs_client: aws_sdk_sqs::Client,
}

impl QueuePublisher for SqsQueuePublisher {
    fn publish(&self, body: &str) -> Result<(), String> {
        let client = self.sqs_client.clone();
        let queue_url = self.queue_url.clone();
        let message_body = body.to_string();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .send_message()
                    .queue_url(queue_url)
                    .message_body(message_body)
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to send tenant message to sqs: {error}"))
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    publisher: &SqsQueuePublisher,
) -> Result<ApiGatewayResponse, Error> {
    let span = invocation_span(
        &event.context.request_id,
        event.context.xray_trace_id.as_deref(),
    );
    let invocation = InvocationContext {
        request_id: event.context.request_id.clone(),
        received_at_ms: Utc::now().timestamp_millis(),
    };

    // The span is current only while the handler runs and is exited on every path.
    let response =
        span.in_scope(|| handle_forward_event(&event.payload, &invocation, publisher, &span))?;
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_subscriber();

    let config = RelayConfig::from_env()?;
    tracing::info!(
        region = %config.region,
        queue_endpoint = %config.queue_endpoint,
        "config_loaded"
    );

    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()))
        .endpoint_url(config.queue_endpoint.clone())
        .load()
        .await;
    let publisher = SqsQueuePublisher {
        queue_url: config.queue_url.clone(),
        sqs_client: aws_sdk_sqs::Client::new(&aws_config),
    };

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let publisher = publisher.clone();
        async move { handle_request(event, &publisher).await }
    }))
    .await
}
