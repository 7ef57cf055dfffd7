//! Coordinate structure used to reference specific locations within received JSON text
//!
//! The parse primitive reports failures as a 1-based line and a 1-based (byte) column. The
//! diagnostics in this crate work in terms of an absolute *character* offset into the received
//! text, so a [Coords] carries both views of the same location.
use serde_json::error::Category;
use std::fmt::{Display, Formatter};

/// A [Coords] represents a single location within the received text
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Coords {
    /// The absolute character position
    pub absolute: usize,
    /// The line position, as reported by the parser (1-based)
    pub line: usize,
    /// The column position, as reported by the parser (1-based, counted in bytes, 0 after a newline)
    pub column: usize,
}

impl Coords {
    /// Locate the character the parser was looking at when it gave up on `text`.
    ///
    /// Column 0 means the parser stopped right after the newline ending the previous line, so
    /// the newline itself is located. Returns `None` when the error carries no position: the
    /// parser ran off the end of the input, or the error was not raised while reading text.
    pub fn of_parse_error(text: &str, error: &serde_json::Error) -> Option<Coords> {
        if error.classify() == Category::Eof || error.line() == 0 {
            return None;
        }

        let line_start = text
            .split_inclusive('\n')
            .take(error.line() - 1)
            .map(str::len)
            .sum::<usize>();
        let byte = match error.column() {
            0 => line_start.saturating_sub(1),
            column => (line_start + column - 1).min(text.len()),
        };

        Some(Coords {
            absolute: char_offset(text, byte),
            line: error.line(),
            column: error.column(),
        })
    }

    /// Coordinates placed just past the final character of `text`
    pub fn end_of(text: &str) -> Coords {
        let line = text.matches('\n').count() + 1;
        let column = text.rsplit('\n').next().map_or(0, str::len) + 1;
        Coords {
            absolute: text.chars().count(),
            line,
            column,
        }
    }
}

/// Number of characters which start strictly before `byte`
fn char_offset(text: &str, byte: usize) -> usize {
    text.char_indices().take_while(|(i, _)| *i < byte).count()
}

impl Display for Coords {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[abs: {}, line: {}, column: {}]",
            self.absolute, self.line, self.column
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Coords;
    use serde_json::Value;

    fn coords_for(text: &str) -> Option<Coords> {
        let err = serde_json::from_str::<Value>(text).unwrap_err();
        Coords::of_parse_error(text, &err)
    }

    #[test]
    fn trailing_commas_should_point_at_the_closing_bracket() {
        let coords = coords_for("[1, 2, 3, ]").unwrap();
        assert_eq!(coords.absolute, 10);
        assert_eq!(coords.line, 1);
        assert_eq!(coords.column, 11);
    }

    #[test]
    fn errors_on_later_lines_should_include_earlier_lines_in_the_offset() {
        let text = "{\n  \"a\": 1,\n  \"b\": x\n}";
        let coords = coords_for(text).unwrap();
        assert_eq!(coords.line, 3);
        assert_eq!(text.chars().nth(coords.absolute), Some('x'));
    }

    #[test]
    fn multibyte_characters_should_count_once() {
        let text = "[\"日本\", x]";
        let coords = coords_for(text).unwrap();
        assert_eq!(text.chars().nth(coords.absolute), Some('x'));
    }

    #[test]
    fn end_of_input_errors_should_have_no_coordinates() {
        assert!(coords_for("").is_none());
        assert!(coords_for("{\"a\": [1, 2").is_none());
    }

    #[test]
    fn end_of_should_sit_after_the_last_character() {
        let coords = Coords::end_of("ab\ncd");
        assert_eq!(coords.absolute, 5);
        assert_eq!(coords.line, 2);
        assert_eq!(coords.column, 3);
    }

    #[test]
    fn raw_newlines_in_strings_should_locate_the_newline() {
        let text = "{\"a\": \"x\ny\"}";
        let coords = coords_for(text).unwrap();
        assert_eq!(coords.line, 2);
        assert_eq!(coords.column, 0);
        assert_eq!(text.chars().nth(coords.absolute), Some('\n'));
    }

    #[test]
    fn coords_should_display_every_view_of_the_location() {
        let coords = coords_for("[1, 2, 3, ]").unwrap();
        assert_eq!(coords.to_string(), "[abs: 10, line: 1, column: 11]");
    }
}
