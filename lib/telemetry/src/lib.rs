//! Request tracing for GraphQL execution engines.
//!
//! The [`RequestTracer`] hooks an engine's request lifecycle (operation
//! start, resolver invocation, field resolution) and stamps each phase's
//! span with well-known tags: resource name, service name, span type, the
//! raw query text, per-variable values, and the analytics sample rate when
//! enabled. Spans are plain `tracing` spans, bridged to OpenTelemetry by
//! the layer built in [`build_otel_layer_from_config`].

use opentelemetry::trace::TracerProvider;
use opentelemetry::{InstrumentationScope, KeyValue};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

use crate::config::TelemetryConfig;
use crate::error::TelemetryError;

pub mod config;
pub mod error;
pub mod options;
pub mod tracer;
pub mod traces;

pub use options::{TracerOptions, DEFAULT_SERVICE_NAME};
pub use tracer::RequestTracer;

/// Builds the subscriber layer and tracer provider for the configured
/// exporters. Returns `None` when no exporter is enabled, so callers can
/// skip the OTel bridge entirely.
pub fn build_otel_layer_from_config<S>(
    config: &TelemetryConfig,
) -> Result<Option<(impl Layer<S> + Send + Sync + 'static, SdkTracerProvider)>, TelemetryError>
where
    S: Subscriber + for<'span> LookupSpan<'span> + Send + Sync + 'static,
{
    if !config.is_tracing_enabled() {
        return Ok(None);
    }

    let resource = Resource::builder()
        .with_attributes(vec![KeyValue::new(
            "service.name",
            config.service.name.clone(),
        )])
        .build();

    let provider = traces::build_trace_provider(config, resource)?;

    let scope = InstrumentationScope::builder("graphql-tracing")
        .with_version(env!("CARGO_PKG_VERSION"))
        .build();
    let tracer = provider.tracer_with_scope(scope);
    let layer = tracing_opentelemetry::layer().with_tracer(tracer);

    Ok(Some((layer, provider)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::Registry;

    #[test]
    fn no_enabled_exporters_yields_no_layer() {
        let config = TelemetryConfig::default();
        let built = build_otel_layer_from_config::<Registry>(&config).unwrap();
        assert!(built.is_none());
    }

    #[test]
    fn disabled_exporters_count_as_no_tracing() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({
            "tracing": { "exporters": [ { "stdout": { "enabled": false } } ] }
        }))
        .unwrap();
        let built = build_otel_layer_from_config::<Registry>(&config).unwrap();
        assert!(built.is_none());
    }

    #[test]
    fn otlp_exporter_builds_batch_processor() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({
            "tracing": { "exporters": [ { "otlp": {
                "endpoint": "http://localhost:4318",
                "batch_processor": {
                    "max_concurrent_exports": 2,
                    "scheduled_delay": "10ms",
                    "max_export_timeout": "50ms"
                }
            } } ] }
        }))
        .unwrap();
        let built = build_otel_layer_from_config::<Registry>(&config).unwrap();
        assert!(built.is_some());
    }

    #[test]
    fn stdout_exporter_builds_layer_and_provider() {
        let config: TelemetryConfig = serde_json::from_value(serde_json::json!({
            "tracing": { "exporters": [ { "stdout": {} } ] }
        }))
        .unwrap();
        let built = build_otel_layer_from_config::<Registry>(&config).unwrap();
        assert!(built.is_some());
    }
}
