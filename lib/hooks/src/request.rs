use std::collections::BTreeMap;

/// Variable values bound to a GraphQL operation, keyed by variable name.
///
/// A `BTreeMap` keeps iteration order deterministic, which keeps the
/// per-variable span tags stable across runs.
pub type Variables = BTreeMap<String, serde_json::Value>;

/// Everything the engine knows about an operation when execution starts.
pub struct OperationDetails<'a> {
    /// The operation name from the document, if the client named it.
    pub operation_name: Option<&'a str>,
    /// The raw query text as received from the client.
    pub query: &'a str,
    /// Variable values bound to this operation.
    pub variables: &'a Variables,
}

/// Identifies a field being resolved: the declaring type and field name.
///
/// The same shape serves both hook sites. For a resolver invocation the
/// `object` is the type whose resolver runs (e.g. `MyMutation`); for a
/// field resolution it is the type declaring the returned field (e.g.
/// `Todo`).
pub struct FieldDetails<'a> {
    pub object: &'a str,
    pub field: &'a str,
}
