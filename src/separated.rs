//! Delimited lines: fields separated by a single character.
//!
//! A line is split on every occurrence of the delimiter; consecutive delimiters
//! produce empty fields. Written lines carry the delimiter after every field,
//! the last one included.
//!
//! ```rust
//! use line_record::{field, SeparatorCodec};
//!
//! #[derive(Default)]
//! struct Person { name: String, age: u32 }
//!
//! let mut codec = SeparatorCodec::<Person>::new(',');
//! codec.define(field!(Person, name), 0)?;
//! codec.define(field!(Person, age), 1)?;
//!
//! let person = codec.parse("John,25")?;
//! assert_eq!((person.name.as_str(), person.age), ("John", 25));
//!
//! let line = codec.write(&Person { name: "Ann".into(), age: 7 })?;
//! assert_eq!(line, "Ann,7,");
//! # Ok::<(), line_record::Error>(())
//! ```

use crate::accessor::Accessor;
use crate::codec::{Codec, Layout};
use crate::convert::FieldType;
use crate::definition::FieldBuilder;
use crate::error::{BoxError, Error, Result};
use crate::options::Delimiter;
use serde::Serialize;
use std::fmt;

/// Position of a delimited field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub index: usize,
}

/// Layout of delimited lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Delimited {
    delimiter: Delimiter,
}

impl Delimited {
    pub fn new(delimiter: impl Into<Delimiter>) -> Self {
        Delimited {
            delimiter: delimiter.into(),
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }
}

impl Layout for Delimited {
    type Locator = Column;
    type Input<'a> = Vec<&'a str>;

    fn initialize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.split(self.delimiter.as_char()).collect()
    }

    fn extract<'a>(
        &self,
        parts: &Self::Input<'a>,
        column: &Column,
        field: &str,
    ) -> Result<&'a str> {
        parts.get(column.index).copied().ok_or_else(|| {
            Error::value(
                field,
                &parts.join(&self.delimiter.as_char().to_string()),
                format!(
                    "index {} is out of range for a line of {} fields",
                    column.index,
                    parts.len()
                ),
            )
        })
    }

    fn emit(&self, value: &str, out: &mut String) {
        out.push_str(value);
        out.push(self.delimiter.as_char());
    }
}

/// Codec for delimited lines.
pub type SeparatorCodec<T> = Codec<T, Delimited>;

impl<T: 'static> Codec<T, Delimited> {
    /// Creates a codec for lines separated by `delimiter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_record::{Delimiter, SeparatorCodec};
    ///
    /// #[derive(Default)]
    /// struct Row { a: String }
    ///
    /// let tabs = SeparatorCodec::<Row>::new(Delimiter::Tab);
    /// let pipes = SeparatorCodec::<Row>::new('|');
    /// assert_eq!(pipes.delimiter(), Delimiter::Pipe);
    /// # let _ = tabs;
    /// ```
    #[must_use]
    pub fn new(delimiter: impl Into<Delimiter>) -> Self {
        Codec::with_layout(Delimited::new(delimiter))
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.layout.delimiter()
    }

    /// Registers a field at split position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] if the accessor does not name a record member.
    pub fn define<V: FieldType>(
        &mut self,
        accessor: Accessor<T, V>,
        index: usize,
    ) -> Result<FieldBuilder<'_, T, V, Column>> {
        self.define_at(accessor, Column { index })
    }

    /// Registers a field whose type has no built-in conversion.
    ///
    /// # Errors
    ///
    /// Same as [`define`](Self::define).
    pub fn define_with<V, R, RE, W>(
        &mut self,
        accessor: Accessor<T, V>,
        index: usize,
        read: R,
        write: W,
    ) -> Result<FieldBuilder<'_, T, V, Column>>
    where
        V: fmt::Debug + 'static,
        R: Fn(&str) -> std::result::Result<V, RE> + Send + Sync + 'static,
        RE: Into<BoxError>,
        W: Fn(&V) -> String + Send + Sync + 'static,
    {
        self.define_at_with(accessor, Column { index }, read, write)
    }
}
