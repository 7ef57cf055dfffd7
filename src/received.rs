//! The value handed to a matcher, before anything is known about it
use serde_json::Value;

/// A received value of unknown shape.
///
/// Only [Received::Text] can ever hold JSON. Everything else is kept around so that
/// diagnostics can show what was actually passed in.
#[derive(Debug, Clone, PartialEq)]
pub enum Received {
    /// Nothing was received at all
    Undefined,
    /// Raw text, possibly JSON
    Text(String),
    /// An already-structured value which is not text
    Value(Value),
}

impl Received {
    /// The text to be parsed, if this is textual input
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Received::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the runtime type of the received value
    pub fn type_name(&self) -> &'static str {
        match self {
            Received::Undefined => "undefined",
            Received::Text(_) => "string",
            Received::Value(v) => value_type_name(v),
        }
    }
}

/// Name of the runtime type of a JSON value
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl From<&str> for Received {
    fn from(value: &str) -> Self {
        Received::Text(value.to_string())
    }
}

impl From<String> for Received {
    fn from(value: String) -> Self {
        Received::Text(value)
    }
}

impl From<&String> for Received {
    fn from(value: &String) -> Self {
        Received::Text(value.clone())
    }
}

impl From<Value> for Received {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => Received::Text(s),
            other => Received::Value(other),
        }
    }
}

impl From<&Value> for Received {
    fn from(value: &Value) -> Self {
        Received::from(value.clone())
    }
}

impl<T: Into<Received>> From<Option<T>> for Received {
    fn from(value: Option<T>) -> Self {
        value.map_or(Received::Undefined, Into::into)
    }
}
