#[derive(Debug, strum::Display, strum::AsRefStr, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub(crate) enum GraphQLSpanKind {
    Operation,
    Parse,
    Validate,
    Resolve,
    Field,
}
