//! Line Formats
//!
//! This module documents the two line formats supported by this library and
//! the rules the codecs apply to them. It contains no code.
//!
//! # Fixed-width lines
//!
//! Every field occupies a known range of characters:
//!
//! ```text
//! 0         1
//! 0123456789012
//! John      025
//! └─ name ─┘└age┘
//! ```
//!
//! | Field | Start | Length | Reading | Writing |
//! |-------|-------|--------|---------|---------|
//! | name | 0 | 10 | verbatim (`"John      "`) | space right-padded |
//! | age | 10 | 3 | trimmed integer (`25`) | zero left-padded |
//!
//! **Rules**:
//! - Offsets and lengths count characters; for ASCII lines they are byte offsets
//! - A field whose start is at or past the end of the line is an error, as is a
//!   field that runs past the end. Text after the last field is ignored
//! - Lengths must be positive
//! - [`validate_definitions`](crate::FixedWidthCodec::validate_definitions)
//!   requires the fields to tile the line in declaration order: each field starts
//!   exactly where the previous one ends. Offsets `0, 10, 13` with lengths
//!   `10, 3, 5` pass; offsets `0, 10, 14` do not
//! - Written fields are concatenated as-is. Padders fill short values and cut long
//!   ones to their first `length` characters; an absent value (`None`) is written
//!   as `length` fill characters
//!
//! With matching padders, writing a parsed line reproduces it exactly:
//! `write(parse(line)) == line`.
//!
//! # Delimited lines
//!
//! Fields are separated by one character, and located by their position after
//! splitting:
//!
//! ```text
//! John,25        ->  ["John", "25"]
//! a,,b           ->  ["a", "", "b"]
//! ```
//!
//! **Rules**:
//! - Every delimiter splits; consecutive delimiters produce empty fields
//! - There is no quoting or escaping: a delimiter inside a value splits it
//! - A field index at or past the number of parts is an error
//! - Every written field is followed by the delimiter, including the last:
//!   `{name: "Ann", age: 7}` is written as `Ann,7,`
//!
//! Supported delimiters are listed in [`Delimiter`](crate::Delimiter); any other
//! character can be used through `Delimiter::Other`.
//!
//! # Conversions
//!
//! Without explicit converters, fields use the member type's
//! [`FieldType`](crate::FieldType) conversions:
//!
//! | Type | Text |
//! |------|------|
//! | `String` | taken verbatim, padding included |
//! | integers, floats, `BigInt` | surrounding whitespace ignored |
//! | `bool` | `true` / `false`, any case |
//! | `char` | exactly one character |
//! | dates and times | ISO 8601 / RFC 3339 |
//! | `Option<V>` | blank text is `None` |
//!
//! # Failure
//!
//! Parsing and writing stop at the first failing field. The error names the field
//! and the offending text; a converter's own error is kept as the source.
