//! Structural comparison of parsed documents against expected values
//!
//! Both comparators walk the actual and expected trees together and collect every
//! [Difference] they find, keyed by the [JsonPointer] of the position at which it occurred.
//! An empty list of differences means the comparison passed.
use serde_json::{Number, Value};

use crate::comparison_error;
use crate::errors::{Details, MatcherResult};
use crate::expected::{AsymmetricMatcher, Expected};
use crate::pointer::JsonPointer;
use crate::received::value_type_name;
use crate::state::MatcherState;

/// How strictly containers are compared
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Every key and element must be accounted for
    Exact,
    /// Objects may carry keys the expected value does not mention
    Partial,
}

/// A single point of disagreement between actual and expected values
#[derive(Debug, Clone, PartialEq)]
pub struct Difference {
    /// Where the difference was found
    pub pointer: JsonPointer,
    /// Rendering of the expected value, or `None` if nothing was expected here
    pub expected: Option<String>,
    /// Rendering of the actual value, or `None` if nothing was found here
    pub actual: Option<String>,
}

/// Borrowed view of one side of the expected tree
#[derive(Clone, Copy)]
enum Node<'a> {
    Plain(&'a Value),
    Expected(&'a Expected),
}

enum Shape<'a> {
    Scalar(&'a Value),
    Array(Vec<Node<'a>>),
    Object(Vec<(&'a str, Node<'a>)>),
    Asymmetric(&'a dyn AsymmetricMatcher),
}

impl<'a> Node<'a> {
    fn shape(self) -> Shape<'a> {
        match self {
            Node::Plain(v) | Node::Expected(Expected::Value(v)) => match v {
                Value::Array(items) => Shape::Array(items.iter().map(Node::Plain).collect()),
                Value::Object(map) => Shape::Object(
                    map.iter()
                        .map(|(k, v)| (k.as_str(), Node::Plain(v)))
                        .collect(),
                ),
                scalar => Shape::Scalar(scalar),
            },
            Node::Expected(Expected::Array(items)) => {
                Shape::Array(items.iter().map(Node::Expected).collect())
            }
            Node::Expected(Expected::Object(entries)) => Shape::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.as_str(), Node::Expected(v)))
                    .collect(),
            ),
            Node::Expected(Expected::Asymmetric(m)) => Shape::Asymmetric(m.as_ref()),
        }
    }

    fn render(self) -> String {
        match self {
            Node::Plain(v) => v.to_string(),
            Node::Expected(e) => e.to_string(),
        }
    }
}

struct Walker<'s> {
    mode: Mode,
    state: &'s MatcherState,
    acc: Vec<Difference>,
}

impl<'s> Walker<'s> {
    fn differ(&mut self, pointer: &JsonPointer, expected: Option<String>, actual: Option<&Value>) {
        self.acc.push(Difference {
            pointer: pointer.clone(),
            expected,
            actual: actual.map(Value::to_string),
        })
    }

    fn walk(
        &mut self,
        actual: &Value,
        expected: Node<'_>,
        pointer: &JsonPointer,
    ) -> MatcherResult<()> {
        match (expected.shape(), actual) {
            (Shape::Asymmetric(m), _) => {
                if !m.asymmetric_match(actual, self.state)? {
                    self.differ(pointer, Some(m.describe()), Some(actual));
                }
            }
            (Shape::Scalar(e), _) => {
                if !scalars_equal(actual, e) {
                    self.differ(pointer, Some(e.to_string()), Some(actual));
                }
            }
            (Shape::Array(items), Value::Array(actual_items)) => {
                if items.len() != actual_items.len() {
                    self.differ(pointer, Some(expected.render()), Some(actual));
                    return Ok(());
                }
                for (i, (a, e)) in actual_items.iter().zip(items).enumerate() {
                    self.walk(a, e, &pointer.child_index(i))?;
                }
            }
            (Shape::Object(entries), Value::Object(map)) => {
                for (key, e) in &entries {
                    let child = pointer.child_name(key);
                    match map.get(*key) {
                        Some(a) => self.walk(a, *e, &child)?,
                        None => self.differ(&child, Some(e.render()), None),
                    }
                }
                if self.mode == Mode::Exact {
                    for (key, a) in map {
                        if !entries.iter().any(|(k, _)| *k == key.as_str()) {
                            self.differ(&pointer.child_name(key), None, Some(a));
                        }
                    }
                }
            }
            _ => self.differ(pointer, Some(expected.render()), Some(actual)),
        }
        Ok(())
    }
}

/// Numbers are equal when they denote the same value, regardless of representation
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}

fn scalars_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

fn compare(
    mode: Mode,
    actual: &Value,
    expected: &Expected,
    state: &MatcherState,
) -> MatcherResult<Vec<Difference>> {
    let mut walker = Walker {
        mode,
        state,
        acc: vec![],
    };
    walker.walk(actual, Node::Expected(expected), &JsonPointer::default())?;
    Ok(walker.acc)
}

/// Exact deep equality, array order included
pub fn equals(
    actual: &Value,
    expected: &Expected,
    state: &MatcherState,
) -> MatcherResult<Vec<Difference>> {
    compare(Mode::Exact, actual, expected, state)
}

/// Subset matching: expected object keys must be present with matching values, actual objects
/// may carry more. Arrays must have the same length, and are matched element by element.
///
/// Both operands must be objects or arrays.
pub fn matches(
    actual: &Value,
    expected: &Expected,
    state: &MatcherState,
) -> MatcherResult<Vec<Difference>> {
    if !(actual.is_object() || actual.is_array()) {
        return comparison_error!(Details::NonObjectOperand {
            role: "received",
            found: value_type_name(actual).to_string(),
        });
    }
    if !expected.is_structured() {
        return comparison_error!(Details::NonObjectOperand {
            role: "expected",
            found: expected.type_name().to_string(),
        });
    }
    compare(Mode::Partial, actual, expected, state)
}

#[cfg(test)]
mod tests {
    use super::{equals, matches};
    use crate::errors::{Details, Stage};
    use crate::expected::Expected;
    use crate::state::MatcherState;
    use serde_json::{json, Value};

    fn exact(actual: Value, expected: Value) -> Vec<String> {
        equals(&actual, &expected.into(), &MatcherState::default())
            .unwrap()
            .iter()
            .map(|d| d.pointer.to_string())
            .collect()
    }

    fn partial(actual: Value, expected: Value) -> Vec<String> {
        matches(&actual, &expected.into(), &MatcherState::default())
            .unwrap()
            .iter()
            .map(|d| d.pointer.to_string())
            .collect()
    }

    #[test]
    fn identical_documents_should_be_equal() {
        let doc = json!({"a": [1, {"b": null}], "c": "x", "d": true});
        assert!(exact(doc.clone(), doc).is_empty());
    }

    #[test]
    fn extra_keys_should_break_equality_but_not_matching() {
        let actual = json!({"a": 1, "b": 2});
        assert_eq!(exact(actual.clone(), json!({"a": 1})), vec!["/b"]);
        assert!(partial(actual, json!({"a": 1})).is_empty());
    }

    #[test]
    fn diverging_values_should_be_located_by_pointer() {
        let actual = json!({"address": {"city": "Nara"}});
        let expected = json!({"address": {"city": "Kyoto"}});
        assert_eq!(partial(actual, expected), vec!["/address/city"]);
    }

    #[test]
    fn missing_keys_should_be_reported() {
        let diffs = matches(
            &json!({"test": "ok"}),
            &json!({"another": true}).into(),
            &MatcherState::default(),
        )
        .unwrap();
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].pointer.to_string(), "/another");
        assert_eq!(diffs[0].actual, None);
        assert_eq!(diffs[0].expected.as_deref(), Some("true"));
    }

    #[test]
    fn array_order_and_length_should_matter() {
        assert_eq!(exact(json!([1, 2]), json!([2, 1])), vec!["/0", "/1"]);
        assert_eq!(exact(json!([1, 2]), json!([1])), vec![""]);
        assert_eq!(partial(json!([1, 2]), json!([1])), vec![""]);
    }

    #[test]
    fn objects_inside_arrays_should_match_partially() {
        let actual = json!([{"type": "home", "number": "1"}, {"type": "iPhone", "number": "2"}]);
        assert!(partial(actual.clone(), json!([{"type": "home"}, {"type": "iPhone"}])).is_empty());
        assert_eq!(exact(actual, json!([{"type": "home"}, {"type": "iPhone"}])).len(), 2);
    }

    #[test]
    fn numbers_should_compare_by_value() {
        assert!(exact(json!({"n": 1}), json!({"n": 1.0})).is_empty());
        assert_eq!(exact(json!({"n": 1}), json!({"n": 1.5})), vec!["/n"]);
        assert_eq!(exact(json!({"n": 1}), json!({"n": "1"})), vec!["/n"]);
    }

    #[test]
    fn type_mismatches_should_be_differences() {
        assert_eq!(exact(json!({"a": [1]}), json!({"a": {"0": 1}})), vec!["/a"]);
        assert_eq!(exact(json!(null), json!({})), vec![""]);
    }

    #[test]
    fn matching_should_reject_scalar_operands() {
        let state = MatcherState::default();
        let err = matches(&json!(5), &Expected::from(json!({})), &state).unwrap_err();
        assert_eq!(err.stage, Stage::Comparison);
        assert!(matches!(
            err.details,
            Details::NonObjectOperand { role: "received", .. }
        ));
        let err = matches(&json!({}), &Expected::from(json!("x")), &state).unwrap_err();
        assert!(matches!(
            err.details,
            Details::NonObjectOperand { role: "expected", .. }
        ));
    }
}
