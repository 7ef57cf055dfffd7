//! Rendering helpers for matcher explanations
//!
//! Everything in here is presentation only. Colors are plain ANSI escapes, applied when the
//! [MatcherState] asks for them.
use crate::compare::Difference;
use crate::received::Received;
use crate::state::{MatcherState, Promise};

/// Indentation applied to every line of a rendered text view
const INDENT: &str = "  ";
/// Marker placed under the offending character
const CARET: char = '^';

const COLOR_RECEIVED: &str = "31";
const COLOR_EXPECTED: &str = "32";
const COLOR_DIM: &str = "2";

fn paint(text: &str, color: &str, state: &MatcherState) -> String {
    if state.color {
        format!("\u{1b}[{}m{}\u{1b}[0m", color, text)
    } else {
        text.to_string()
    }
}

pub fn received_color(text: &str, state: &MatcherState) -> String {
    paint(text, COLOR_RECEIVED, state)
}

pub fn expected_color(text: &str, state: &MatcherState) -> String {
    paint(text, COLOR_EXPECTED, state)
}

/// The `expect(received).not.toX(expected)` line which heads every explanation
pub fn matcher_hint(name: &str, args: &[&str], state: &MatcherState) -> String {
    let mut hint = paint("expect(", COLOR_DIM, state);
    hint.push_str(&received_color("received", state));
    hint.push_str(&paint(")", COLOR_DIM, state));
    match state.promise {
        Promise::Resolves => hint.push_str(".resolves"),
        Promise::Rejects => hint.push_str(".rejects"),
        Promise::None => {}
    }
    if state.is_not {
        hint.push_str(".not");
    }
    hint.push('.');
    hint.push_str(name);
    hint.push_str(&paint("(", COLOR_DIM, state));
    let args = args
        .iter()
        .map(|a| expected_color(a, state))
        .collect::<Vec<_>>()
        .join(&paint(", ", COLOR_DIM, state));
    hint.push_str(&args);
    hint.push_str(&paint(")", COLOR_DIM, state));
    hint
}

/// Render a received value the way it would be written in source
pub fn stringify(received: &Received) -> String {
    match received {
        Received::Undefined => "undefined".to_string(),
        Received::Text(s) => serde_json::Value::String(s.clone()).to_string(),
        Received::Value(v) => v.to_string(),
    }
}

pub fn print_received(received: &Received, state: &MatcherState) -> String {
    received_color(&stringify(received), state)
}

pub fn print_expected(expected: &str, state: &MatcherState) -> String {
    expected_color(expected, state)
}

/// Show the value, preceded by its type unless the type is evident from the value
pub fn print_with_type(label: &str, received: &Received, state: &MatcherState) -> String {
    let value = format!("{} has value: {}", label, print_received(received, state));
    match received.type_name() {
        "null" | "undefined" => value,
        t => format!("{} has type:  {}\n{}", label, t, value),
    }
}

/// Render `text` line by line, wrapped at `width` characters, with a caret under the character
/// at `offset` (counted in characters).
///
/// The caret goes on the first line whose span contains `offset`, where each line accounts for
/// its own length plus one for the newline that ends it. An offset which lands on a newline is
/// therefore drawn at the start of the following line. Offsets past the end are drawn after the
/// last character.
pub fn render_caret(text: &str, offset: usize, width: usize) -> String {
    let width = width.max(1);
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = vec![];
    let mut consumed = 0;
    let mut placed = false;

    for (i, line) in lines.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        let len = chars.len();
        let last = i + 1 == lines.len();

        let column = if !placed && (offset < consumed + len || last) {
            placed = true;
            Some(offset.saturating_sub(consumed).min(len))
        } else {
            None
        };

        if chars.is_empty() {
            out.push(INDENT.trim_end().to_string());
            if column.is_some() {
                out.push(format!("{}{}", INDENT, CARET));
            }
        }

        for (n, segment) in chars.chunks(width).enumerate() {
            let start = n * width;
            let end = start + segment.len();
            out.push(format!("{}{}", INDENT, segment.iter().collect::<String>()));
            if let Some(col) = column {
                if col >= start && (col < end || (col == len && end == len)) {
                    out.push(format!("{}{}{}", INDENT, " ".repeat(col - start), CARET));
                }
            }
        }

        consumed += len + 1;
    }

    out.join("\n")
}

/// Render a list of differences as an expected/received listing
pub fn render_differences(differences: &[Difference], state: &MatcherState) -> String {
    let mut out = vec![
        expected_color("- Expected", state),
        received_color("+ Received", state),
    ];
    for d in differences {
        out.push(String::new());
        let location = if d.pointer.is_empty() {
            "(root)".to_string()
        } else {
            d.pointer.to_string()
        };
        out.push(format!("{}{}", INDENT, location));
        match &d.expected {
            Some(e) => out.push(expected_color(&format!("{}- {}", INDENT, e), state)),
            None => out.push(expected_color(&format!("{}- (absent)", INDENT), state)),
        }
        match &d.actual {
            Some(a) => out.push(received_color(&format!("{}+ {}", INDENT, a), state)),
            None => out.push(received_color(&format!("{}+ (absent)", INDENT), state)),
        }
    }
    out.join("\n")
}
