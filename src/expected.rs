//! Expected values, which may embed placeholder matchers at any depth
use serde_json::Value;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

use crate::errors::MatcherResult;
use crate::state::MatcherState;

/// A placeholder which stands in for part of an expected structure and decides for itself
/// whether the corresponding part of the actual value is acceptable.
pub trait AsymmetricMatcher {
    /// Check `actual`, the value found at the placeholder's position
    fn asymmetric_match(&self, actual: &Value, state: &MatcherState) -> MatcherResult<bool>;

    /// A short rendering used in diagnostics, e.g. `JsonContaining {"city":"Nara"}`
    fn describe(&self) -> String;
}

/// An expected structure: plain JSON, or containers holding placeholders
#[derive(Clone)]
pub enum Expected {
    /// A plain JSON value, compared structurally
    Value(Value),
    /// An array whose elements may be placeholders
    Array(Vec<Expected>),
    /// An object whose members may be placeholders
    Object(Vec<(String, Expected)>),
    /// A placeholder matcher
    Asymmetric(Arc<dyn AsymmetricMatcher>),
}

impl Expected {
    /// Build an object from `(key, value)` pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Expected>,
    {
        Expected::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Build an array from a sequence of values
    pub fn array<V, I>(items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Expected>,
    {
        Expected::Array(items.into_iter().map(Into::into).collect())
    }

    /// Wrap a placeholder matcher
    pub fn asymmetric(matcher: impl AsymmetricMatcher + 'static) -> Self {
        Expected::Asymmetric(Arc::new(matcher))
    }

    /// Whether this can be the right-hand side of a partial match: an object, an array, or a
    /// placeholder which decides for itself
    pub fn is_structured(&self) -> bool {
        match self {
            Expected::Value(v) => v.is_object() || v.is_array(),
            _ => true,
        }
    }

    /// Type name of the expected value, used when reporting misuse
    pub fn type_name(&self) -> &'static str {
        match self {
            Expected::Value(v) => crate::received::value_type_name(v),
            Expected::Array(_) => "array",
            Expected::Object(_) => "object",
            Expected::Asymmetric(_) => "placeholder",
        }
    }
}

impl Display for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expected::Value(v) => write!(f, "{}", v),
            Expected::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Expected::Object(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}:{}", Value::String(k.clone()), v)?;
                }
                write!(f, "}}")
            }
            Expected::Asymmetric(m) => write!(f, "{}", m.describe()),
        }
    }
}

impl Debug for Expected {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Expected({})", self)
    }
}

impl From<Value> for Expected {
    fn from(value: Value) -> Self {
        Expected::Value(value)
    }
}

impl From<&Value> for Expected {
    fn from(value: &Value) -> Self {
        Expected::Value(value.clone())
    }
}
