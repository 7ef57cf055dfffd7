use json_matchers::engine::parse_json;
use json_matchers::{MatcherState, Received, Verdict};
use serde_json::{json, Value};

const MATCHER_NAME: &str = "parseJSON";
const PASS_MESSAGE: &str = "received value is a JSON string";
const ERROR_MESSAGE: &str = "received value is not a JSON string";
const INVALID_MESSAGE: &str = "received value is not a valid JSON string";

fn check(received: impl Into<Received>) -> Verdict {
    parse_json(
        &MatcherState::default(),
        &received.into(),
        MATCHER_NAME,
        &[],
    )
    .unwrap()
}

fn serialized(value: Value) -> String {
    serde_json::to_string(&value).unwrap()
}

#[test]
fn should_pass_for_serialized_values() {
    let values = [
        json!(null),
        json!(33),
        json!(true),
        json!("test"),
        json!(["apple", "banana"]),
        json!({"test": "ok"}),
        json!({"nested": [{"a": [1, null, {"b": false}]}]}),
    ];
    for value in values {
        let text = serialized(value.clone());
        assert!(check(text.as_str()).passed(), "{} should pass", text);
    }
}

#[test]
fn should_pass_for_formatted_strings() {
    let text = serde_json::to_string_pretty(&json!({"test": "ok", "list": [1, 2]})).unwrap();
    assert!(check(text).passed());
}

#[test]
fn should_not_pass_for_values_which_are_not_strings() {
    let values = [
        Received::Undefined,
        Received::from(json!(null)),
        Received::from(json!(33)),
        Received::from(json!(false)),
        Received::from(json!(["apple", "banana"])),
        Received::from(json!({"test": "ok"})),
    ];
    for received in values {
        let verdict = check(received.clone());
        assert!(!verdict.passed(), "{:?} should not pass", received);
        assert!(verdict.message().contains(ERROR_MESSAGE));
    }
}

#[test]
fn should_not_pass_for_invalid_json_string() {
    assert!(!check("test").passed());
}

#[test]
fn should_return_pass_message_for_json_string() {
    let verdict = check(serialized(json!(null)));
    assert!(verdict.message().contains(PASS_MESSAGE));
}

#[test]
fn should_return_error_message_for_not_string() {
    let verdict = check(json!(null));
    let message = verdict.message();
    assert!(message.contains(ERROR_MESSAGE));
    assert!(message.contains("Received has value: null"));
    assert!(!message.contains("has type"));
}

#[test]
fn should_annotate_the_type_of_non_string_values() {
    let message = check(json!(33)).message();
    assert!(message.contains("Received has type:  number"));
    assert!(message.contains("Received has value: 33"));
}

#[test]
fn should_return_invalid_message_for_invalid_json_string() {
    let verdict = check("test");
    let message = verdict.message();
    assert!(message.contains(INVALID_MESSAGE));
    assert!(message.contains("expected ident at line 1 column 2"));
    assert!(message.ends_with("  test\n   ^"));
}

#[test]
fn should_show_the_raw_value_for_empty_strings() {
    let message = check("").message();
    assert!(message.contains(INVALID_MESSAGE));
    assert!(message.ends_with("Received: \"\""));
    assert!(!message.contains('^'));
}

#[test]
fn should_place_the_caret_on_the_right_line() {
    let text = "{\n  \"firstName\": \"John\",\n  \"lastName\" \"doe\"\n}";
    let message = check(text).message();
    assert!(message.contains("expected `:` at line 3 column 14"));
    assert!(message.ends_with(
        "  {\n  \
         \x20 \"firstName\": \"John\",\n  \
         \x20 \"lastName\" \"doe\"\n  \
         \x20            ^\n  \
         }"
    ));
}

#[test]
fn should_point_at_the_start_of_the_line_after_a_raw_newline() {
    let text = "{\"a\": \"x\ny\", \"b\": 1, \"c\": [1, 2, 3, 4, 5, 6, 7]}";
    let message = check(text).message();
    assert!(message.contains("at line 2 column 0"));
    assert!(message.ends_with(
        "  {\"a\": \"x\n  \
         y\", \"b\": 1, \"c\": [1, 2, 3, 4, 5, 6, 7]}\n  \
         ^"
    ));
}

#[test]
fn should_wrap_long_lines() {
    let text = format!("[{}, ]", "1, ".repeat(10).trim_end_matches(", "));
    let state = MatcherState::default().with_wrap_width(10);
    let verdict = parse_json(&state, &Received::from(text.as_str()), MATCHER_NAME, &[]).unwrap();
    let message = verdict.message();
    let rendered = message.rsplit("\n\n").next().unwrap();
    for line in rendered.lines() {
        assert!(line.chars().count() <= 12, "{:?} is too long", line);
    }
    assert!(message.contains('^'));
}

#[test]
fn should_phrase_negated_and_async_hints() {
    let state = MatcherState::default().negated().rejects();
    let verdict = parse_json(&state, &Received::from("{}"), "toBeJSON", &[]).unwrap();
    assert!(verdict.passed());
    assert!(verdict
        .message()
        .starts_with("expect(received).rejects.not.toBeJSON()"));
}
