use serde_json::Value;

/// String-keyed context values handed to the application root.
pub type ContextMap = serde_json::Map<String, Value>;

/// Mandatory project file holding the `context` key.
pub const CDK_JSON: &str = "cdk.json";

/// Cached context lookups written by the CDK CLI.
pub const CDK_CONTEXT_JSON: &str = "cdk.context.json";

/// Top-level key of `cdk.json` carrying the context mapping.
pub const CONTEXT_KEY: &str = "context";

/// Short name of a JSON value's kind, for error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
