use thiserror::Error;

/// Errors raised while constructing wrappers or resolving nested type names.
///
/// Missing attributes are never errors; reads of absent keys yield `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HashWrapperError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, HashWrapperError>;

/// Short JSON kind name used in error messages.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
