//! A table of matchers and placeholders, looked up by name
//!
//! [register_all] fills a [Registry] with every matcher this crate provides. A process-wide
//! instance is available through [Registry::global], built on first use.
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::errors::{Details, MatcherResult};
use crate::expected::Expected;
use crate::format::{matcher_hint, print_with_type};
use crate::matchers::{
    self, JSON_CONTAINING, TO_BE_JSON, TO_EQUAL, TO_EQUAL_JSON, TO_MATCH_JSON, TO_MATCH_OBJECT,
};
use crate::received::Received;
use crate::registry_error;
use crate::state::MatcherState;
use crate::verdict::Verdict;

pub const ARRAY_CONTAINING: &str = "arrayContaining";

/// Arguments passed after the received value
#[derive(Debug, Clone, Default)]
pub struct MatcherArgs {
    pub expected: Option<Expected>,
    pub path: Option<String>,
}

impl MatcherArgs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn expected(expected: impl Into<Expected>) -> Self {
        Self {
            expected: Some(expected.into()),
            path: None,
        }
    }

    pub fn at(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    fn require_expected(&self, name: &str) -> MatcherResult<&Expected> {
        match &self.expected {
            Some(expected) => Ok(expected),
            None => registry_error!(Details::MissingExpected(name.to_string())),
        }
    }
}

/// Signature shared by every registered matcher
pub type MatcherFn = fn(&MatcherState, &Received, &MatcherArgs) -> MatcherResult<Verdict>;

/// Signature shared by every registered placeholder factory
pub type PlaceholderFn = fn(Expected) -> Expected;

#[derive(Default)]
pub struct Registry {
    matchers: BTreeMap<&'static str, MatcherFn>,
    placeholders: BTreeMap<&'static str, PlaceholderFn>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every matcher and placeholder in this crate
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        register_all(&mut registry);
        registry
    }

    /// The process-wide registry, populated once on first use
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::with_defaults)
    }

    pub fn register(&mut self, name: &'static str, matcher: MatcherFn) {
        if self.matchers.insert(name, matcher).is_some() {
            tracing::debug!(name, "replaced registered matcher");
        }
    }

    pub fn register_placeholder(&mut self, name: &'static str, factory: PlaceholderFn) {
        if self.placeholders.insert(name, factory).is_some() {
            tracing::debug!(name, "replaced registered placeholder");
        }
    }

    /// Names of all registered matchers, in sorted order
    pub fn matcher_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.matchers.keys().copied()
    }

    /// Names of all registered placeholders, in sorted order
    pub fn placeholder_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.placeholders.keys().copied()
    }

    /// Run the matcher registered under `name`
    pub fn invoke(
        &self,
        name: &str,
        state: &MatcherState,
        received: &Received,
        args: &MatcherArgs,
    ) -> MatcherResult<Verdict> {
        match self.matchers.get(name) {
            Some(matcher) => matcher(state, received, args),
            None => registry_error!(Details::UnknownMatcher(name.to_string())),
        }
    }

    /// Build the placeholder registered under `name` around `expected`
    pub fn placeholder(
        &self,
        name: &str,
        expected: impl Into<Expected>,
    ) -> MatcherResult<Expected> {
        match self.placeholders.get(name) {
            Some(factory) => Ok(factory(expected.into())),
            None => registry_error!(Details::UnknownMatcher(name.to_string())),
        }
    }
}

fn to_be_json(
    state: &MatcherState,
    received: &Received,
    _: &MatcherArgs,
) -> MatcherResult<Verdict> {
    matchers::is_json(state, received)
}

fn to_equal_json(
    state: &MatcherState,
    received: &Received,
    args: &MatcherArgs,
) -> MatcherResult<Verdict> {
    let expected = args.require_expected(TO_EQUAL_JSON)?;
    matchers::equals_json(state, received, expected, args.path.as_deref())
}

fn to_match_json(
    state: &MatcherState,
    received: &Received,
    args: &MatcherArgs,
) -> MatcherResult<Verdict> {
    let expected = args.require_expected(TO_MATCH_JSON)?;
    matchers::matches_json(state, received, expected, args.path.as_deref())
}

/// The received value as a plain JSON value, if there is one
fn received_value(received: &Received) -> Option<Value> {
    match received {
        Received::Undefined => None,
        Received::Text(s) => Some(Value::String(s.clone())),
        Received::Value(v) => Some(v.clone()),
    }
}

fn undefined_verdict(name: &'static str, state: &MatcherState) -> Verdict {
    let state = *state;
    Verdict::lazy(false, move || {
        format!(
            "{}\n\n{}",
            matcher_hint(name, &["expected"], &state),
            print_with_type("Received", &Received::Undefined, &state)
        )
    })
}

fn to_equal(
    state: &MatcherState,
    received: &Received,
    args: &MatcherArgs,
) -> MatcherResult<Verdict> {
    let expected = args.require_expected(TO_EQUAL)?;
    match received_value(received) {
        Some(actual) => matchers::equals_value(state, &actual, expected),
        None => Ok(undefined_verdict(TO_EQUAL, state)),
    }
}

fn to_match_object(
    state: &MatcherState,
    received: &Received,
    args: &MatcherArgs,
) -> MatcherResult<Verdict> {
    let expected = args.require_expected(TO_MATCH_OBJECT)?;
    match received_value(received) {
        Some(actual) => matchers::matches_value(state, &actual, expected),
        None => Ok(undefined_verdict(TO_MATCH_OBJECT, state)),
    }
}

fn json_containing(expected: Expected) -> Expected {
    matchers::json_containing(expected).into()
}

fn array_containing(expected: Expected) -> Expected {
    match expected {
        Expected::Array(items) => matchers::array_containing(items).into(),
        Expected::Value(Value::Array(items)) => matchers::array_containing(items).into(),
        other => matchers::array_containing([other]).into(),
    }
}

/// Register every matcher and placeholder this crate provides
pub fn register_all(registry: &mut Registry) {
    registry.register(TO_BE_JSON, to_be_json);
    registry.register(TO_EQUAL_JSON, to_equal_json);
    registry.register(TO_MATCH_JSON, to_match_json);
    registry.register(TO_EQUAL, to_equal);
    registry.register(TO_MATCH_OBJECT, to_match_object);
    registry.register_placeholder(JSON_CONTAINING, json_containing);
    registry.register_placeholder(ARRAY_CONTAINING, array_containing);
}
