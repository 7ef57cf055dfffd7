//! The named matchers and placeholders
//!
//! Each matcher is a thin call into [parse_json](crate::engine::parse_json) with a fixed
//! comparison strategy.
use serde_json::Value;

use crate::compare::{self, Difference, Mode};
use crate::engine::{parse_json, parse_json_then};
use crate::errors::MatcherResult;
use crate::expected::{AsymmetricMatcher, Expected};
use crate::format::{matcher_hint, print_expected, received_color, render_differences};
use crate::paths::narrow_optional;
use crate::received::Received;
use crate::state::MatcherState;
use crate::verdict::Verdict;

pub const TO_BE_JSON: &str = "toBeJSON";
pub const TO_EQUAL_JSON: &str = "toEqualJSON";
pub const TO_MATCH_JSON: &str = "toMatchJSON";
pub const JSON_CONTAINING: &str = "jsonContaining";
pub const TO_EQUAL: &str = "toEqual";
pub const TO_MATCH_OBJECT: &str = "toMatchObject";

fn hint_args(path: Option<&str>) -> &'static [&'static str] {
    match path {
        Some(_) => &["expected", "path"],
        None => &["expected"],
    }
}

/// Run a comparison and turn its differences into a verdict
fn compare_verdict(
    mode: Mode,
    state: &MatcherState,
    name: &'static str,
    args: &'static [&'static str],
    actual: &Value,
    expected: &Expected,
) -> MatcherResult<Verdict> {
    let differences: Vec<Difference> = match mode {
        Mode::Exact => compare::equals(actual, expected, state)?,
        Mode::Partial => compare::matches(actual, expected, state)?,
    };
    let pass = differences.is_empty();
    let state = *state;
    let actual = actual.to_string();
    let expected = expected.to_string();
    Ok(Verdict::lazy(pass, move || {
        let hint = matcher_hint(name, args, &state);
        if pass {
            format!(
                "{}\n\nExpected: not {}\nReceived:     {}",
                hint,
                print_expected(&expected, &state),
                received_color(&actual, &state)
            )
        } else {
            format!("{}\n\n{}", hint, render_differences(&differences, &state))
        }
    }))
}

/// Narrow the parsed document with `path`, then compare what is left
fn narrowed_verdict(
    mode: Mode,
    state: &MatcherState,
    name: &'static str,
    document: &Value,
    expected: &Expected,
    path: Option<&str>,
) -> MatcherResult<Verdict> {
    let args = hint_args(path);
    match narrow_optional(document, path)? {
        Some(actual) => compare_verdict(mode, state, name, args, &actual, expected),
        None => {
            let state = *state;
            let selector = path.unwrap_or_default().to_string();
            let expected = expected.to_string();
            Ok(Verdict::lazy(false, move || {
                format!(
                    "{}\n\nselector `{}` matched nothing in the received JSON\nExpected: {}",
                    matcher_hint(name, args, &state),
                    selector,
                    print_expected(&expected, &state)
                )
            }))
        }
    }
}

/// Passes when `received` is a string holding valid JSON
pub fn is_json(state: &MatcherState, received: &Received) -> MatcherResult<Verdict> {
    parse_json(state, received, TO_BE_JSON, &[])
}

/// Passes when `received` parses to a document equal to `expected`, after narrowing by `path`
pub fn equals_json(
    state: &MatcherState,
    received: &Received,
    expected: &Expected,
    path: Option<&str>,
) -> MatcherResult<Verdict> {
    parse_json_then(state, received, TO_EQUAL_JSON, hint_args(path), |json| {
        narrowed_verdict(Mode::Exact, state, TO_EQUAL_JSON, json, expected, path)
    })
}

/// Passes when `received` parses to a document which contains `expected`, after narrowing by
/// `path`
pub fn matches_json(
    state: &MatcherState,
    received: &Received,
    expected: &Expected,
    path: Option<&str>,
) -> MatcherResult<Verdict> {
    parse_json_then(state, received, TO_MATCH_JSON, hint_args(path), |json| {
        narrowed_verdict(Mode::Partial, state, TO_MATCH_JSON, json, expected, path)
    })
}

/// Plain structural equality of an already-parsed value, resolving any placeholders in
/// `expected`
pub fn equals_value(
    state: &MatcherState,
    actual: &Value,
    expected: &Expected,
) -> MatcherResult<Verdict> {
    compare_verdict(Mode::Exact, state, TO_EQUAL, &["expected"], actual, expected)
}

/// Partial structural match of an already-parsed value
pub fn matches_value(
    state: &MatcherState,
    actual: &Value,
    expected: &Expected,
) -> MatcherResult<Verdict> {
    compare_verdict(Mode::Partial, state, TO_MATCH_OBJECT, &["expected"], actual, expected)
}

/// What a placeholder found at its position in the actual value
enum Nested<'a> {
    /// Already parsed into an object or array
    Structured(&'a Value),
    /// Anything else, which must still be JSON text
    Raw(Received),
}

impl<'a> Nested<'a> {
    fn classify(actual: &'a Value) -> Self {
        match actual {
            Value::Object(_) | Value::Array(_) => Nested::Structured(actual),
            other => Nested::Raw(Received::from(other)),
        }
    }
}

/// The verdict of `jsonContaining(expected)` against the value found at its position
pub fn json_containing_verdict(
    state: &MatcherState,
    actual: &Value,
    expected: &Expected,
) -> MatcherResult<Verdict> {
    match Nested::classify(actual) {
        Nested::Structured(value) => matches_value(state, value, expected),
        Nested::Raw(received) => matches_json(state, &received, expected, None),
    }
}

/// Placeholder which matches objects, or JSON strings holding objects, that contain a sample
#[derive(Debug, Clone)]
pub struct JsonContaining {
    sample: Expected,
    inverse: bool,
}

impl AsymmetricMatcher for JsonContaining {
    fn asymmetric_match(&self, actual: &Value, state: &MatcherState) -> MatcherResult<bool> {
        let state = MatcherState {
            is_not: false,
            ..*state
        };
        let verdict = json_containing_verdict(&state, actual, &self.sample)?;
        Ok(verdict.passed() != self.inverse)
    }

    fn describe(&self) -> String {
        let name = if self.inverse {
            "NotJsonContaining"
        } else {
            "JsonContaining"
        };
        format!("{} {}", name, self.sample)
    }
}

impl From<JsonContaining> for Expected {
    fn from(matcher: JsonContaining) -> Self {
        Expected::asymmetric(matcher)
    }
}

/// `expect.jsonContaining(expected)`
pub fn json_containing(expected: impl Into<Expected>) -> JsonContaining {
    JsonContaining {
        sample: expected.into(),
        inverse: false,
    }
}

/// `expect.not.jsonContaining(expected)`
pub fn not_json_containing(expected: impl Into<Expected>) -> JsonContaining {
    JsonContaining {
        sample: expected.into(),
        inverse: true,
    }
}

/// Placeholder which matches arrays holding every sample element, in any order
#[derive(Debug, Clone)]
pub struct ArrayContaining {
    sample: Vec<Expected>,
    inverse: bool,
}

impl AsymmetricMatcher for ArrayContaining {
    fn asymmetric_match(&self, actual: &Value, state: &MatcherState) -> MatcherResult<bool> {
        let items: &[Value] = match actual {
            Value::Array(items) => items,
            _ => &[],
        };
        let mut contained = true;
        for wanted in &self.sample {
            let mut found = false;
            for item in items {
                if compare::equals(item, wanted, state)?.is_empty() {
                    found = true;
                    break;
                }
            }
            if !found {
                contained = false;
                break;
            }
        }
        Ok(contained != self.inverse)
    }

    fn describe(&self) -> String {
        let name = if self.inverse {
            "NotArrayContaining"
        } else {
            "ArrayContaining"
        };
        format!("{} {}", name, Expected::Array(self.sample.clone()))
    }
}

impl From<ArrayContaining> for Expected {
    fn from(matcher: ArrayContaining) -> Self {
        Expected::asymmetric(matcher)
    }
}

/// `expect.arrayContaining(expected)`
pub fn array_containing<V, I>(items: I) -> ArrayContaining
where
    I: IntoIterator<Item = V>,
    V: Into<Expected>,
{
    ArrayContaining {
        sample: items.into_iter().map(Into::into).collect(),
        inverse: false,
    }
}

/// `expect.not.arrayContaining(expected)`
pub fn not_array_containing<V, I>(items: I) -> ArrayContaining
where
    I: IntoIterator<Item = V>,
    V: Into<Expected>,
{
    ArrayContaining {
        inverse: true,
        ..array_containing(items)
    }
}
