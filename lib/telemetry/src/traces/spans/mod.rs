//! Spans are created through small wrapper structs (see `graphql`) rather
//! than ad-hoc `tracing` calls.
//!
//! The wrappers enforce consistent naming and attributes and provide
//! focused helpers for recording common fields.
//!
//! Attribute keys live in `attributes` as `const` values to avoid typos and
//! keep keys consistent between the adapter and its tests.
//!
//! Each span includes `graphql.kind`, which tags the semantic role of the
//! span within the request lifecycle.
pub const TARGET_NAME: &str = "graphql-tracing";

pub mod attributes;
pub mod graphql;
pub mod kind;
