use std::error::Error;

use graphql_tracing_hooks::{ExecutionTracer, FieldDetails, OperationDetails};
use tracing::Span;

use crate::config::TelemetryConfig;
use crate::options::TracerOptions;
use crate::traces::spans::attributes::{ERROR_MESSAGE, ERROR_TYPE, OTEL_STATUS_CODE};
use crate::traces::spans::graphql::{
    FieldSpan, GraphQLOperationSpanBuilder, GraphQLParseSpan, GraphQLValidateSpan, ResolverSpan,
};

/// The request tracer adapter.
///
/// Implements [`ExecutionTracer`] by starting one span per lifecycle phase
/// and copying request metadata into its tags. The options captured at
/// construction are the tracer's only state, so a single instance can be
/// shared across all in-flight requests.
#[derive(Clone, Debug)]
pub struct RequestTracer {
    options: TracerOptions,
}

impl Default for RequestTracer {
    fn default() -> Self {
        Self::new(TracerOptions::new())
    }
}

impl RequestTracer {
    pub fn new(options: TracerOptions) -> Self {
        RequestTracer { options }
    }

    pub fn from_config(config: &TelemetryConfig) -> Self {
        Self::new(TracerOptions::from_config(config))
    }

    pub fn options(&self) -> &TracerOptions {
        &self.options
    }
}

impl ExecutionTracer for RequestTracer {
    fn operation_span(&self, operation: &OperationDetails<'_>) -> Span {
        GraphQLOperationSpanBuilder::from_operation(&self.options, operation)
            .build()
            .span
    }

    fn parse_span(&self) -> Span {
        GraphQLParseSpan::new().span
    }

    fn validation_span(&self) -> Span {
        GraphQLValidateSpan::new().span
    }

    fn resolver_span(&self, resolver: &FieldDetails<'_>) -> Span {
        ResolverSpan::new(resolver).span
    }

    fn field_span(&self, field: &FieldDetails<'_>) -> Span {
        FieldSpan::new(field).span
    }

    fn record_resolver_error(&self, span: &Span, error: &dyn Error) {
        span.record(OTEL_STATUS_CODE, "Error");
        span.record(ERROR_TYPE, "resolver");
        span.record(ERROR_MESSAGE, error.to_string().as_str());
    }
}
