//! The tracer capability a GraphQL execution engine consumes.
//!
//! An engine that wants its request lifecycle traced threads an
//! [`ExecutionTracer`] through its invocation chain and asks it for a span
//! at each phase boundary: once per operation, once per resolver
//! invocation, and once per resolved field. The engine enters the returned
//! span for the duration of the phase, so parent/child links fall out of
//! the call structure and every span is finished when the engine drops its
//! handle, on success and error paths alike.

pub mod request;
pub mod tracer;

pub use request::{FieldDetails, OperationDetails, Variables};
pub use tracer::{ExecutionTracer, NoopTracer};
