//! Assertion matchers for JSON strings
//!
//! The matchers check that a received value is a string holding valid JSON, and optionally that
//! the parsed document (or the part of it selected by a JSONPath selector) equals or contains an
//! expected structure. Invalid JSON is explained with a caret under the offending character:
//!
//! ```text
//! expect(received).toBeJSON()
//!
//! received value is not a valid JSON string
//! trailing comma at line 1 column 11
//!
//!   [1, 2, 3, ]
//!             ^
//! ```
//!
//! ```
//! use json_matchers::{expect, json_containing, Expected};
//! use serde_json::json;
//!
//! let received = json!({"address": {"city": "Nara", "zip": "630-0192"}}).to_string();
//! expect(received.as_str()).to_be_json();
//! expect(received.as_str())
//!     .to_equal_json(json!({"city": "Nara", "zip": "630-0192"}), Some("$.address"));
//! expect(received.as_str()).to_match_json(json!({"city": "Nara"}), Some("$.address"));
//!
//! let outer = json!({"address": r#"{"city": "Nara", "zip": "630-0192"}"#});
//! let city = json_containing(json!({"city": "Nara"}));
//! expect(outer).to_equal(Expected::object([("address", city)]));
//! ```

pub mod compare;
pub mod coords;
pub mod engine;
pub mod errors;
pub mod expect;
pub mod expected;
pub mod format;
pub mod matchers;
pub mod paths;
pub mod pointer;
pub mod received;
pub mod registry;
pub mod state;
pub mod verdict;
#[cfg(test)]
mod test_macros;

pub use errors::{Error, MatcherResult};
pub use expect::{expect, Expectation};
pub use expected::{AsymmetricMatcher, Expected};
pub use matchers::{
    array_containing, equals_json, is_json, json_containing, matches_json, not_array_containing,
    not_json_containing,
};
pub use received::Received;
pub use registry::{register_all, MatcherArgs, Registry};
pub use state::MatcherState;
pub use verdict::Verdict;
