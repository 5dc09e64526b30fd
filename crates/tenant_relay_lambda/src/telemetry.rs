use tracing::field::Empty;
use tracing::{Span, Subscriber};
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the JSON log subscriber. `RUST_LOG` overrides the `info` default.
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(error) = json_subscriber(filter, std::io::stdout).try_init() {
        tracing::debug!(%error, "subscriber_already_installed");
    }
}

/// One flattened JSON object per event, carrying the current span's fields.
pub fn json_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_writer(writer),
    )
}

/// Span for one invocation. `tenant_id` and `application_id` must stay in step
/// with `TENANT_ID_ATTRIBUTE` and `APPLICATION_ID_ATTRIBUTE`; they are declared
/// empty so the handler can record them through `TraceContext`.
pub fn invocation_span(request_id: &str, xray_trace_id: Option<&str>) -> Span {
    tracing::info_span!(
        "forward_tenant",
        request_id = request_id,
        xray_trace_id = xray_trace_id,
        tenant_id = Empty,
        application_id = Empty,
    )
}
