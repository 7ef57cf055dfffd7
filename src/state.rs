//! Per-assertion context inherited from the calling test
//!
//! None of these flags change whether a matcher passes. They only change how its explanation is
//! phrased and rendered.
use std::env;

/// Default number of characters per rendered line in caret diagnostics
pub const DEFAULT_WRAP_WIDTH: usize = 80;

/// Which asynchronous assertion context, if any, the matcher runs in
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Promise {
    #[default]
    None,
    Resolves,
    Rejects,
}

/// Context flags handed to every matcher
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MatcherState {
    /// The assertion is negated (`expect(x).not...`)
    pub is_not: bool,
    /// The asynchronous context the assertion runs in
    pub promise: Promise,
    /// Emit ANSI colors in explanations
    pub color: bool,
    /// Maximum characters per rendered line when showing received text
    pub wrap_width: usize,
}

impl Default for MatcherState {
    fn default() -> Self {
        Self {
            is_not: false,
            promise: Promise::None,
            color: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl MatcherState {
    /// Build a state whose color setting follows the `NO_COLOR` / `FORCE_COLOR` conventions
    pub fn from_env() -> Self {
        let color = match (env::var_os("NO_COLOR"), env::var("FORCE_COLOR")) {
            (Some(v), _) if !v.is_empty() => false,
            (_, Ok(v)) => !matches!(v.as_str(), "0" | "false"),
            _ => false,
        };
        Self::default().with_color(color)
    }

    pub fn negated(mut self) -> Self {
        self.is_not = !self.is_not;
        self
    }

    pub fn resolves(mut self) -> Self {
        self.promise = Promise::Resolves;
        self
    }

    pub fn rejects(mut self) -> Self {
        self.promise = Promise::Rejects;
        self
    }

    /// Colors are only ever emitted when the `color` feature is enabled
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color && cfg!(feature = "color");
        self
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width.max(1);
        self
    }
}
