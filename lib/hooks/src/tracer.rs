use std::error::Error;

use tracing::Span;

use crate::request::{FieldDetails, OperationDetails};

/// Lifecycle hooks an execution engine calls to trace a request.
///
/// Implementations must be safe to share across concurrently executing
/// requests; the engine holds one tracer for its whole lifetime. Each hook
/// returns a span the engine enters for the duration of the corresponding
/// phase and drops when the phase completes, whether or not it succeeded.
pub trait ExecutionTracer: Send + Sync {
    /// Called once when an operation starts executing. The returned span
    /// is the root of the request's span tree.
    fn operation_span(&self, operation: &OperationDetails<'_>) -> Span;

    /// Called before the document is parsed. Engines that parse ahead of
    /// execution (persisted documents, cached plans) may never call this.
    fn parse_span(&self) -> Span {
        Span::none()
    }

    /// Called before the document is validated against the schema.
    fn validation_span(&self) -> Span {
        Span::none()
    }

    /// Called for each resolver invocation, inside the operation span (or
    /// inside an enclosing field span for nested selections).
    fn resolver_span(&self, resolver: &FieldDetails<'_>) -> Span;

    /// Called for each field resolved by the enclosing resolver.
    fn field_span(&self, field: &FieldDetails<'_>) -> Span;

    /// Called when a resolver returns an error, before its span is
    /// dropped. The error itself passes through the engine unmodified;
    /// this hook only annotates the span.
    fn record_resolver_error(&self, span: &Span, error: &dyn Error) {
        let _ = (span, error);
    }
}

/// A tracer that records nothing. Every hook returns a disabled span, so
/// engines can hold a `dyn ExecutionTracer` unconditionally.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl ExecutionTracer for NoopTracer {
    fn operation_span(&self, _operation: &OperationDetails<'_>) -> Span {
        Span::none()
    }

    fn resolver_span(&self, _resolver: &FieldDetails<'_>) -> Span {
        Span::none()
    }

    fn field_span(&self, _field: &FieldDetails<'_>) -> Span {
        Span::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Variables;

    #[test]
    fn noop_tracer_returns_disabled_spans() {
        let tracer = NoopTracer;
        let variables = Variables::new();
        let operation = tracer.operation_span(&OperationDetails {
            operation_name: None,
            query: "{ todos { id } }",
            variables: &variables,
        });
        assert!(operation.is_disabled());

        let resolver = tracer.resolver_span(&FieldDetails {
            object: "Query",
            field: "todos",
        });
        assert!(resolver.is_disabled());

        let field = tracer.field_span(&FieldDetails {
            object: "Todo",
            field: "id",
        });
        assert!(field.is_disabled());
        assert!(tracer.parse_span().is_disabled());
        assert!(tracer.validation_span().is_disabled());
    }
}
