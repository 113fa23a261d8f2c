//! Error types for record parsing and writing.
//!
//! Errors fall into three groups, by when they are discovered:
//!
//! - **Argument errors**: a required input to [`parse`](crate::Codec::parse) or
//!   [`write`](crate::Codec::write) was absent
//! - **Definition errors**: the codec was declared incorrectly (zero-length span,
//!   unresolvable accessor, non-contiguous fixed-width layout). These surface while
//!   the codec is being built, before any line is processed
//! - **Value errors**: a specific field failed while processing a line (validator
//!   rejection, span or column out of range, conversion failure)
//!
//! Value errors always name the field and the offending text. When a converter
//! failed, its error is kept as the [`source`](std::error::Error::source).
//!
//! ## Examples
//!
//! ```rust
//! use line_record::{field, Error, SeparatorCodec};
//!
//! #[derive(Default, Debug)]
//! struct Person { name: String, age: u32 }
//!
//! let mut codec = SeparatorCodec::<Person>::new(',');
//! codec.define(field!(Person, name), 0).unwrap();
//! codec.define(field!(Person, age), 1).unwrap();
//!
//! let err = codec.parse("John,old").unwrap_err();
//! assert!(matches!(err, Error::Value { .. }));
//! assert!(err.to_string().contains("age"));
//! ```

use thiserror::Error;

/// Boxed error returned by read and write converters.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Represents every failure a codec can report.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was absent.
    #[error("missing argument: `{name}`")]
    Argument { name: &'static str },

    /// The codec was declared incorrectly.
    #[error("invalid definition for field `{field}`: {reason}")]
    Definition { field: String, reason: String },

    /// A field could not be read from or written to a line.
    #[error("invalid value for `{field}`: {value:?} ({reason})")]
    Value {
        field: String,
        value: String,
        reason: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl Error {
    /// Creates an argument error for a missing input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_record::Error;
    ///
    /// let err = Error::argument("text");
    /// assert_eq!(err.to_string(), "missing argument: `text`");
    /// ```
    pub fn argument(name: &'static str) -> Self {
        Error::Argument { name }
    }

    /// Creates a definition error for the named field.
    pub fn definition(field: &str, reason: impl Into<String>) -> Self {
        Error::Definition {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a value error without an underlying cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_record::Error;
    ///
    /// let err = Error::value("age", "abc", "rejected by validator");
    /// assert!(err.to_string().contains("\"abc\""));
    /// ```
    pub fn value(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Error::Value {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
            source: None,
        }
    }

    /// Creates a value error wrapping a converter failure.
    pub fn conversion(field: &str, value: &str, source: BoxError) -> Self {
        Error::Value {
            field: field.to_string(),
            value: value.to_string(),
            reason: source.to_string(),
            source: Some(source),
        }
    }

    /// Returns the name of the field this error concerns, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Argument { .. } => None,
            Error::Definition { field, .. } | Error::Value { field, .. } => Some(field.as_str()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_conversion_keeps_source() {
        let cause = "x1".parse::<i32>().unwrap_err();
        let err = Error::conversion("age", "x1", Box::new(cause));

        assert_eq!(err.field(), Some("age"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_definition_message() {
        let err = Error::definition("name", "length must be positive");
        assert_eq!(
            err.to_string(),
            "invalid definition for field `name`: length must be positive"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_argument_has_no_field() {
        assert_eq!(Error::argument("record").field(), None);
    }
}
