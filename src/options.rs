//! Configuration values for line codecs.
//!
//! - [`Delimiter`]: the separator character of a delimited line
//! - [`Padding`]: how a fixed-width field is filled out to its declared length
//!
//! ## Examples
//!
//! ```rust
//! use line_record::{Delimiter, Padding};
//!
//! assert_eq!(Delimiter::Tab.as_char(), '\t');
//! assert_eq!(Delimiter::from(';'), Delimiter::Semicolon);
//!
//! assert_eq!(Padding::ZERO_LEFT.apply("7", 3), "007");
//! assert_eq!(Padding::SPACE_RIGHT.apply("Ann", 5), "Ann  ");
//! ```

use crate::padding;

/// Separator character for delimited lines.
///
/// # Examples
///
/// ```rust
/// use line_record::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// assert_eq!(Delimiter::Other('^').as_char(), '^');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    Other(char),
}

impl Delimiter {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
            Delimiter::Other(c) => *c,
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        match c {
            ',' => Delimiter::Comma,
            '\t' => Delimiter::Tab,
            '|' => Delimiter::Pipe,
            ';' => Delimiter::Semicolon,
            other => Delimiter::Other(other),
        }
    }
}

/// Side and fill character used to bring a value to a fixed length.
///
/// Values shorter than the length are filled on the given side. Values longer
/// than the length are cut to their first `length` characters, whichever side
/// the padding is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Padding {
    /// Fill on the left, e.g. numbers: `7` -> `007`.
    Left(char),
    /// Fill on the right, e.g. names: `Ann` -> `Ann  `.
    Right(char),
}

impl Padding {
    pub const ZERO_LEFT: Padding = Padding::Left('0');
    pub const ZERO_RIGHT: Padding = Padding::Right('0');
    pub const SPACE_LEFT: Padding = Padding::Left(' ');
    pub const SPACE_RIGHT: Padding = Padding::Right(' ');

    /// Returns the fill character.
    #[must_use]
    pub const fn fill(&self) -> char {
        match self {
            Padding::Left(c) | Padding::Right(c) => *c,
        }
    }

    /// Pads or truncates `text` to exactly `length` characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_record::Padding;
    ///
    /// assert_eq!(Padding::ZERO_LEFT.apply("12345", 3), "123");
    /// ```
    #[must_use]
    pub fn apply(&self, text: &str, length: usize) -> String {
        match self {
            Padding::Left(c) => padding::pad_left(text, length, *c),
            Padding::Right(c) => padding::pad_right(text, length, *c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_roundtrips_through_char() {
        for d in [
            Delimiter::Comma,
            Delimiter::Tab,
            Delimiter::Pipe,
            Delimiter::Semicolon,
            Delimiter::Other('#'),
        ] {
            assert_eq!(Delimiter::from(d.as_char()), d);
        }
    }

    #[test]
    fn test_padding_fill() {
        assert_eq!(Padding::ZERO_RIGHT.fill(), '0');
        assert_eq!(Padding::SPACE_LEFT.fill(), ' ');
        assert_eq!(Padding::Right('*').apply("ab", 4), "ab**");
    }
}
