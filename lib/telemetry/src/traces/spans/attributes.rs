/// OpenTelemetry standard attributes
pub const OTEL_STATUS_CODE: &str = "otel.status_code";
pub const OTEL_KIND: &str = "otel.kind";

/// OpenTelemetry standard attributes for errors
pub const ERROR_TYPE: &str = "error.type";
pub const ERROR_MESSAGE: &str = "error.message";

/// Request identity attributes
pub const RESOURCE_NAME: &str = "resource.name";
pub const SERVICE_NAME: &str = "service.name";
pub const SPAN_TYPE: &str = "span.type";
pub const ANALYTICS_EVENT_SAMPLE_RATE: &str = "analytics.event_sample_rate";

/// GraphQL attributes
pub const QUERY: &str = "query";
pub const RESOLVER_OBJECT: &str = "resolver.object";
pub const RESOLVER_FIELD: &str = "resolver.field";
/// Per-variable tags are namespaced under this prefix, e.g. `variables.text`.
pub const VARIABLES_PREFIX: &str = "variables.";

/// Span-kind dispatch attribute
pub const GRAPHQL_KIND: &str = "graphql.kind";

/// Fixed values
pub const SPAN_TYPE_GRAPHQL: &str = "graphql";
pub const DEFAULT_RESOURCE_NAME: &str = "graphql.operation";
