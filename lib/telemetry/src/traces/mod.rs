use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::{
    trace::{
        BatchConfigBuilder, BatchSpanProcessor, Sampler, SdkTracerProvider, SimpleSpanProcessor,
        SpanExporter as SdkSpanExporter, TracerProviderBuilder,
    },
    Resource,
};

use crate::config::{BatchProcessorConfig, TelemetryConfig, TracingExporterConfig};
use crate::error::TelemetryError;

pub mod spans;

pub(crate) fn build_trace_provider(
    config: &TelemetryConfig,
    resource: Resource,
) -> Result<SdkTracerProvider, TelemetryError> {
    let builder = TracerProviderBuilder::default()
        .with_sampler(Sampler::TraceIdRatioBased(config.tracing.collect.sampling))
        .with_resource(resource);

    Ok(setup_exporters(config, builder)?.build())
}

fn setup_exporters(
    config: &TelemetryConfig,
    mut tracer_provider_builder: TracerProviderBuilder,
) -> Result<TracerProviderBuilder, TelemetryError> {
    for exporter_config in &config.tracing.exporters {
        match exporter_config {
            TracingExporterConfig::Stdout(stdout_config) => {
                if !stdout_config.enabled {
                    tracing::debug!("stdout tracing exporter is disabled");
                    continue;
                }
                tracer_provider_builder = tracer_provider_builder.with_span_processor(
                    SimpleSpanProcessor::new(opentelemetry_stdout::SpanExporter::default()),
                );
            }
            TracingExporterConfig::Otlp(otlp_config) => {
                if !otlp_config.enabled {
                    tracing::debug!("otlp tracing exporter is disabled");
                    continue;
                }
                tracing::debug!(endpoint = %otlp_config.endpoint, "setting up otlp tracing exporter");
                let span_exporter = SpanExporter::builder()
                    .with_http()
                    .with_endpoint(otlp_config.endpoint.clone())
                    .with_timeout(otlp_config.batch_processor.max_export_timeout)
                    .with_protocol(Protocol::HttpBinary)
                    .build()
                    .map_err(|e| TelemetryError::SpanExporterSetup(e.to_string()))?;

                tracer_provider_builder = tracer_provider_builder.with_span_processor(
                    build_batched_span_processor(&otlp_config.batch_processor, span_exporter),
                );
            }
        }
    }

    Ok(tracer_provider_builder)
}

fn build_batched_span_processor(
    config: &BatchProcessorConfig,
    exporter: impl SdkSpanExporter + 'static,
) -> BatchSpanProcessor {
    BatchSpanProcessor::builder(exporter)
        .with_batch_config(
            BatchConfigBuilder::default()
                .with_max_concurrent_exports(config.max_concurrent_exports as usize)
                .with_max_export_batch_size(config.max_export_batch_size as usize)
                .with_max_export_timeout(config.max_export_timeout)
                .with_max_queue_size(config.max_queue_size as usize)
                .with_scheduled_delay(config.scheduled_delay)
                .build(),
        )
        .build()
}
