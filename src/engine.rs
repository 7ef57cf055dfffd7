//! The dispatch routine shared by every matcher
//!
//! [parse_json] type-checks the received value, parses it, explains parse failures with a caret
//! under the offending character, and otherwise hands the parsed document to a comparison
//! callback. Wrong-type input and invalid JSON always come back as failing verdicts. Only errors
//! raised by the callback itself are propagated as `Err`.
use serde_json::Value;
use tracing::{debug, trace};

use crate::coords::Coords;
use crate::errors::MatcherResult;
use crate::format::{
    expected_color, matcher_hint, print_received, print_with_type, received_color, render_caret,
};
use crate::received::Received;
use crate::state::MatcherState;
use crate::verdict::Verdict;

/// Check that `received` is a JSON string.
///
/// `matcher_name` and `args` are only used to phrase the explanation.
pub fn parse_json(
    state: &MatcherState,
    received: &Received,
    matcher_name: &str,
    args: &[&str],
) -> MatcherResult<Verdict> {
    evaluate(state, received, matcher_name, args, None::<fn(&Value) -> MatcherResult<Verdict>>)
}

/// Check that `received` is a JSON string, then let `compare` decide on the parsed document.
///
/// The verdict returned by `compare` is passed through unchanged.
pub fn parse_json_then<F>(
    state: &MatcherState,
    received: &Received,
    matcher_name: &str,
    args: &[&str],
    compare: F,
) -> MatcherResult<Verdict>
where
    F: FnOnce(&Value) -> MatcherResult<Verdict>,
{
    evaluate(state, received, matcher_name, args, Some(compare))
}

fn evaluate<F>(
    state: &MatcherState,
    received: &Received,
    matcher_name: &str,
    args: &[&str],
    compare: Option<F>,
) -> MatcherResult<Verdict>
where
    F: FnOnce(&Value) -> MatcherResult<Verdict>,
{
    let state = *state;
    let hint = matcher_hint(matcher_name, args, &state);

    let text = match received.as_text() {
        Some(text) => text,
        None => {
            debug!(
                matcher = matcher_name,
                received_type = received.type_name(),
                "received value is not a string"
            );
            let received = received.clone();
            return Ok(Verdict::lazy(false, move || {
                format!(
                    "{}\n\n{} value is not a {}\n{}",
                    hint,
                    received_color("received", &state),
                    expected_color("JSON string", &state),
                    print_with_type("Received", &received, &state)
                )
            }));
        }
    };

    match serde_json::from_str::<Value>(text) {
        Ok(json) => match compare {
            Some(compare) => {
                trace!(matcher = matcher_name, "delegating parsed document to comparison");
                compare(&json)
            }
            None => {
                trace!(matcher = matcher_name, "received value is a JSON string");
                let received = received.clone();
                Ok(Verdict::lazy(true, move || {
                    format!(
                        "{}\n\n{} value is a {}\n{}",
                        hint,
                        received_color("received", &state),
                        expected_color("JSON string", &state),
                        print_with_type("Received", &received, &state)
                    )
                }))
            }
        },
        Err(error) => {
            // No position means the parser ran out of input, so point at the end.
            let coords =
                Coords::of_parse_error(text, &error).unwrap_or_else(|| Coords::end_of(text));
            debug!(
                matcher = matcher_name,
                coords = %coords,
                error = %error,
                "received value is not valid JSON"
            );
            let parser_message = error.to_string();
            let received = received.clone();
            let text = text.to_string();
            Ok(Verdict::lazy(false, move || {
                let mut message = format!(
                    "{}\n\n{} value is not a valid {}\n{}\n",
                    hint,
                    received_color("received", &state),
                    expected_color("JSON string", &state),
                    parser_message
                );
                if text.trim().is_empty() {
                    message.push_str(&format!("Received: {}", print_received(&received, &state)));
                } else {
                    message.push('\n');
                    message.push_str(&render_caret(&text, coords.absolute, state.wrap_width));
                }
                message
            }))
        }
    }
}
