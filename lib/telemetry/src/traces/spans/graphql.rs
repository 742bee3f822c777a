use graphql_tracing_hooks::{FieldDetails, OperationDetails};
use tracing::{field::Empty, info_span, Span};
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::options::TracerOptions;
use crate::traces::spans::attributes::{
    ANALYTICS_EVENT_SAMPLE_RATE, DEFAULT_RESOURCE_NAME, SPAN_TYPE_GRAPHQL, VARIABLES_PREFIX,
};
use crate::traces::spans::{kind::GraphQLSpanKind, TARGET_NAME};

pub struct GraphQLOperationSpanBuilder<'a> {
    options: &'a TracerOptions,
    operation: &'a OperationDetails<'a>,
}

/// The root span of one GraphQL request.
#[derive(Clone)]
pub struct GraphQLOperationSpan {
    pub span: Span,
}

impl std::ops::Deref for GraphQLOperationSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl<'a> GraphQLOperationSpanBuilder<'a> {
    pub fn from_operation(options: &'a TracerOptions, operation: &'a OperationDetails<'a>) -> Self {
        GraphQLOperationSpanBuilder { options, operation }
    }

    /// Consume self and turn into a [Span]
    pub fn build(self) -> GraphQLOperationSpan {
        let kind: &'static str = GraphQLSpanKind::Operation.into();
        let resource_name = self
            .operation
            .operation_name
            .unwrap_or(DEFAULT_RESOURCE_NAME);

        let span = info_span!(
            target: TARGET_NAME,
            "graphql.request",
            "graphql.kind" = kind,
            "otel.kind" = "Server",
            "otel.status_code" = Empty,
            "error.type" = Empty,
            "error.message" = Empty,
            "resource.name" = resource_name,
            "service.name" = self.options.service_name(),
            "span.type" = SPAN_TYPE_GRAPHQL,
            "analytics.event_sample_rate" = Empty,
            "query" = self.operation.query,
        );

        if let Some(rate) = self.options.analytics_rate() {
            span.record(ANALYTICS_EVENT_SAMPLE_RATE, rate);
        }

        // Variable names are only known at runtime, so these tags cannot be
        // declared as span fields and go through the OTel extension instead.
        for (name, value) in self.operation.variables {
            span.set_attribute(
                format!("{}{}", VARIABLES_PREFIX, name),
                variable_tag_value(value),
            );
        }

        GraphQLOperationSpan { span }
    }
}

/// Strings are tagged verbatim, everything else in its JSON rendering.
fn variable_tag_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Span covering one resolver invocation.
#[derive(Clone)]
pub struct ResolverSpan {
    pub span: Span,
}

impl std::ops::Deref for ResolverSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl ResolverSpan {
    pub fn new(resolver: &FieldDetails<'_>) -> Self {
        let kind: &'static str = GraphQLSpanKind::Resolve.into();
        let resource_name = format!("{}.{}", resolver.object, resolver.field);
        let span = info_span!(
            target: TARGET_NAME,
            "graphql.resolve",
            "graphql.kind" = kind,
            "otel.kind" = "Internal",
            "otel.status_code" = Empty,
            "error.type" = Empty,
            "error.message" = Empty,
            "resource.name" = resource_name,
            "resolver.object" = resolver.object,
            "resolver.field" = resolver.field,
        );
        ResolverSpan { span }
    }
}

/// Span covering the resolution of a single returned field.
#[derive(Clone)]
pub struct FieldSpan {
    pub span: Span,
}

impl std::ops::Deref for FieldSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl FieldSpan {
    pub fn new(field: &FieldDetails<'_>) -> Self {
        let kind: &'static str = GraphQLSpanKind::Field.into();
        let resource_name = format!("{}.{}", field.object, field.field);
        let span = info_span!(
            target: TARGET_NAME,
            "graphql.field",
            "graphql.kind" = kind,
            "otel.kind" = "Internal",
            "otel.status_code" = Empty,
            "error.type" = Empty,
            "error.message" = Empty,
            "resource.name" = resource_name,
            "resolver.object" = field.object,
            "resolver.field" = field.field,
        );
        FieldSpan { span }
    }
}

#[derive(Clone)]
pub struct GraphQLParseSpan {
    pub span: Span,
}

impl std::ops::Deref for GraphQLParseSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl Default for GraphQLParseSpan {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphQLParseSpan {
    pub fn new() -> Self {
        let kind: &'static str = GraphQLSpanKind::Parse.into();
        let span = info_span!(
            target: TARGET_NAME,
            "graphql.parse",
            "graphql.kind" = kind,
            "otel.kind" = "Internal",
            "otel.status_code" = Empty,
            "error.type" = Empty,
        );
        GraphQLParseSpan { span }
    }
}

#[derive(Clone)]
pub struct GraphQLValidateSpan {
    pub span: Span,
}

impl std::ops::Deref for GraphQLValidateSpan {
    type Target = Span;
    fn deref(&self) -> &Self::Target {
        &self.span
    }
}

impl Default for GraphQLValidateSpan {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphQLValidateSpan {
    pub fn new() -> Self {
        let kind: &'static str = GraphQLSpanKind::Validate.into();
        let span = info_span!(
            target: TARGET_NAME,
            "graphql.validate",
            "graphql.kind" = kind,
            "otel.kind" = "Internal",
            "otel.status_code" = Empty,
            "error.type" = Empty,
        );
        GraphQLValidateSpan { span }
    }
}
