//! An `expect(received).to...()` front end over the [Registry]
//!
//! Assertions dispatch by name through a registry and panic with the verdict's explanation when
//! they do not hold. The `try_*` variants hand back the verdict instead.
use crate::errors::MatcherResult;
use crate::expected::Expected;
use crate::matchers::{TO_BE_JSON, TO_EQUAL, TO_EQUAL_JSON, TO_MATCH_JSON, TO_MATCH_OBJECT};
use crate::received::Received;
use crate::registry::{MatcherArgs, Registry};
use crate::state::MatcherState;
use crate::verdict::Verdict;

/// Start an assertion on `received`, using the process-wide registry
pub fn expect(received: impl Into<Received>) -> Expectation<'static> {
    Registry::global().expect(received)
}

/// A pending assertion on a received value
pub struct Expectation<'r> {
    registry: &'r Registry,
    received: Received,
    state: MatcherState,
}

impl Registry {
    /// Start an assertion on `received`, dispatching through this registry
    pub fn expect(&self, received: impl Into<Received>) -> Expectation<'_> {
        Expectation {
            registry: self,
            received: received.into(),
            state: MatcherState::from_env(),
        }
    }
}

impl<'r> Expectation<'r> {
    /// Negate the assertion
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.state = self.state.negated();
        self
    }

    pub fn resolves(mut self) -> Self {
        self.state = self.state.resolves();
        self
    }

    pub fn rejects(mut self) -> Self {
        self.state = self.state.rejects();
        self
    }

    /// Replace the whole matcher state, e.g. to force colors off
    pub fn with_state(mut self, state: MatcherState) -> Self {
        self.state = state;
        self
    }

    fn run(&self, name: &str, args: &MatcherArgs) -> MatcherResult<Verdict> {
        self.registry.invoke(name, &self.state, &self.received, args)
    }

    #[track_caller]
    fn assert(&self, name: &str, args: MatcherArgs) {
        match self.run(name, &args) {
            Ok(verdict) if verdict.holds(self.state.is_not) => {}
            Ok(verdict) => panic!("{}", verdict.message()),
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_to_be_json(&self) -> MatcherResult<Verdict> {
        self.run(TO_BE_JSON, &MatcherArgs::none())
    }

    pub fn try_to_equal_json(
        &self,
        expected: impl Into<Expected>,
        path: Option<&str>,
    ) -> MatcherResult<Verdict> {
        self.run(TO_EQUAL_JSON, &with_path(expected, path))
    }

    pub fn try_to_match_json(
        &self,
        expected: impl Into<Expected>,
        path: Option<&str>,
    ) -> MatcherResult<Verdict> {
        self.run(TO_MATCH_JSON, &with_path(expected, path))
    }

    /// Received text must be valid JSON
    #[track_caller]
    pub fn to_be_json(&self) {
        self.assert(TO_BE_JSON, MatcherArgs::none())
    }

    /// Received text must parse to `expected`, after narrowing by `path`
    #[track_caller]
    pub fn to_equal_json(&self, expected: impl Into<Expected>, path: Option<&str>) {
        self.assert(TO_EQUAL_JSON, with_path(expected, path))
    }

    /// Received text must parse to a document containing `expected`, after narrowing by `path`
    #[track_caller]
    pub fn to_match_json(&self, expected: impl Into<Expected>, path: Option<&str>) {
        self.assert(TO_MATCH_JSON, with_path(expected, path))
    }

    /// The received value itself must equal `expected`, placeholders included
    #[track_caller]
    pub fn to_equal(&self, expected: impl Into<Expected>) {
        self.assert(TO_EQUAL, MatcherArgs::expected(expected))
    }

    #[track_caller]
    pub fn to_match_object(&self, expected: impl Into<Expected>) {
        self.assert(TO_MATCH_OBJECT, MatcherArgs::expected(expected))
    }
}

fn with_path(expected: impl Into<Expected>, path: Option<&str>) -> MatcherArgs {
    let args = MatcherArgs::expected(expected);
    match path {
        Some(path) => args.at(path),
        None => args,
    }
}

#[cfg(test)]
mod tests {
    use super::expect;
    use crate::state::MatcherState;
    use serde_json::json;

    #[test]
    fn passing_assertions_should_not_panic() {
        expect(r#"{"a":1,"b":2}"#).to_match_json(json!({"a": 1}), None);
        expect(r#"{"a":1,"b":2}"#).not().to_equal_json(json!({"a": 1}), None);
        expect(None::<&str>).not().to_be_json();
    }

    #[test]
    #[should_panic(expected = "not a valid JSON string")]
    fn failing_assertions_should_panic_with_the_explanation() {
        expect("[1, 2, 3, ]")
            .with_state(MatcherState::default())
            .to_be_json();
    }

    #[test]
    #[should_panic(expected = "not a valid JSONPath selector")]
    fn selector_errors_should_panic() {
        expect("{}").to_equal_json(json!({}), Some("$["));
    }

    #[test]
    fn try_variants_should_return_the_verdict() {
        let verdict = expect("{}")
            .with_state(MatcherState::default())
            .not()
            .try_to_be_json()
            .unwrap();
        assert!(verdict.passed());
        assert!(verdict.message().contains("expect(received).not.toBeJSON()"));
    }
}
