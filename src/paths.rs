//! Narrowing of parsed documents with JSONPath selectors
//!
//! Selectors are evaluated with `serde_json_path` (RFC 9535). Results are *unwrapped*: a selector
//! which matches a single node yields that node, one which matches several yields an array of
//! them in query order, and one which matches nothing yields `None`.
use serde_json::Value;
use serde_json_path::JsonPath;
use std::borrow::Cow;

use crate::errors::{Details, MatcherResult};
use crate::narrowing_error;

/// The root identifier which every selector must start with
const ROOT: char = '$';

/// Prefix selectors which omit the root identifier, so `address.city` reads as `$.address.city`
fn normalise(selector: &str) -> Cow<'_, str> {
    let trimmed = selector.trim();
    if trimmed.starts_with(ROOT) {
        Cow::Borrowed(trimmed)
    } else if trimmed.starts_with('[') || trimmed.starts_with('.') {
        Cow::Owned(format!("{}{}", ROOT, trimmed))
    } else {
        Cow::Owned(format!("{}.{}", ROOT, trimmed))
    }
}

/// Select the part of `document` addressed by `selector`.
///
/// An empty (or whitespace-only) selector selects the whole document.
pub fn narrow(document: &Value, selector: &str) -> MatcherResult<Option<Value>> {
    if selector.trim().is_empty() {
        return Ok(Some(document.clone()));
    }

    let normalised = normalise(selector);
    let path = match JsonPath::parse(&normalised) {
        Ok(path) => path,
        Err(e) => {
            return narrowing_error!(Details::InvalidSelector {
                selector: selector.to_string(),
                reason: e.to_string(),
            })
        }
    };

    let mut nodes = path.query(document).all();
    tracing::trace!(selector = %normalised, matched = nodes.len(), "narrowed document");
    Ok(match nodes.len() {
        0 => None,
        1 => nodes.pop().cloned(),
        _ => Some(Value::Array(nodes.into_iter().cloned().collect())),
    })
}

/// Narrow `document` if a selector is present, otherwise hand it back untouched
pub fn narrow_optional(document: &Value, selector: Option<&str>) -> MatcherResult<Option<Value>> {
    match selector {
        Some(selector) => narrow(document, selector),
        None => Ok(Some(document.clone())),
    }
}
