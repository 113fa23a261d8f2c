//! Fixed-width lines: every field occupies a known character range.
//!
//! Fields are declared with a start offset and a length, counted in characters.
//! For ASCII lines these are byte offsets. Output is the plain concatenation of
//! the written fields, so every field should use a padder (or an equivalent
//! write converter) that produces exactly `length` characters.
//!
//! ```rust
//! use line_record::{field, FixedWidthCodec};
//!
//! #[derive(Default)]
//! struct Person { name: String, age: u32 }
//!
//! let mut codec = FixedWidthCodec::<Person>::new();
//! codec.define(field!(Person, name), 0, 10)?.with_write_space_right_padder();
//! codec.define(field!(Person, age), 10, 3)?.with_write_zero_left_padder();
//! codec.validate_definitions()?;
//!
//! let person = codec.parse("John      025")?;
//! assert_eq!(person.name.trim_end(), "John");
//! assert_eq!(person.age, 25);
//!
//! let line = codec.write(&Person { name: "Ann".into(), age: 7 })?;
//! assert_eq!(line, "Ann       007");
//! # Ok::<(), line_record::Error>(())
//! ```

use crate::accessor::Accessor;
use crate::codec::{Codec, Layout};
use crate::convert::FieldType;
use crate::definition::FieldBuilder;
use crate::error::{BoxError, Error, Result};
use crate::options::Padding;
use serde::Serialize;
use std::fmt;

/// Character range of a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub length: usize,
}

impl Span {
    /// Offset just past the field.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Layout of fixed-width lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidth;

/// A line prepared for character-offset slicing.
pub struct FixedLine<'a> {
    text: &'a str,
    // Byte offset of every character plus the end; `None` when the line is ASCII.
    bounds: Option<Vec<usize>>,
}

impl<'a> FixedLine<'a> {
    fn new(text: &'a str) -> Self {
        let bounds = if text.is_ascii() {
            None
        } else {
            Some(
                text.char_indices()
                    .map(|(i, _)| i)
                    .chain(std::iter::once(text.len()))
                    .collect(),
            )
        };
        FixedLine { text, bounds }
    }

    fn char_len(&self) -> usize {
        match &self.bounds {
            Some(bounds) => bounds.len() - 1,
            None => self.text.len(),
        }
    }

    fn slice(&self, span: &Span) -> &'a str {
        match &self.bounds {
            Some(bounds) => &self.text[bounds[span.start]..bounds[span.end()]],
            None => &self.text[span.start..span.end()],
        }
    }
}

impl Layout for FixedWidth {
    type Locator = Span;
    type Input<'a> = FixedLine<'a>;

    fn initialize<'a>(&self, text: &'a str) -> FixedLine<'a> {
        FixedLine::new(text)
    }

    fn extract<'a>(
        &self,
        input: &Self::Input<'a>,
        span: &Span,
        field: &str,
    ) -> Result<&'a str> {
        let len = input.char_len();
        if span.start >= len {
            return Err(Error::value(
                field,
                input.text,
                format!(
                    "start position {} is out of range for a line of {len} characters",
                    span.start
                ),
            ));
        }
        if span.end() > len {
            return Err(Error::value(
                field,
                input.text,
                format!(
                    "length {} from position {} extends beyond a line of {len} characters",
                    span.length, span.start
                ),
            ));
        }
        Ok(input.slice(span))
    }

    fn emit(&self, value: &str, out: &mut String) {
        out.push_str(value);
    }
}

/// Codec for fixed-width lines.
pub type FixedWidthCodec<T> = Codec<T, FixedWidth>;

fn span_for(name: &str, start: usize, length: usize) -> Result<Span> {
    if length == 0 {
        return Err(Error::definition(name, "length must be positive"));
    }
    if start.checked_add(length).is_none() {
        return Err(Error::definition(
            name,
            format!("start {start} plus length {length} overflows"),
        ));
    }
    Ok(Span { start, length })
}

impl<T: 'static> Codec<T, FixedWidth> {
    /// Creates a fixed-width codec with no fields.
    #[must_use]
    pub fn new() -> Self {
        Codec::with_layout(FixedWidth)
    }

    /// Registers a field at `start` spanning `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] if `length` is zero, the span overflows,
    /// or the accessor does not name a record member.
    pub fn define<V: FieldType>(
        &mut self,
        accessor: Accessor<T, V>,
        start: usize,
        length: usize,
    ) -> Result<FieldBuilder<'_, T, V, Span>> {
        let span = span_for(accessor.name(), start, length)?;
        self.define_at(accessor, span)
    }

    /// Registers a field whose type has no built-in conversion.
    ///
    /// # Errors
    ///
    /// Same as [`define`](Self::define).
    pub fn define_with<V, R, RE, W>(
        &mut self,
        accessor: Accessor<T, V>,
        start: usize,
        length: usize,
        read: R,
        write: W,
    ) -> Result<FieldBuilder<'_, T, V, Span>>
    where
        V: fmt::Debug + 'static,
        R: Fn(&str) -> std::result::Result<V, RE> + Send + Sync + 'static,
        RE: Into<BoxError>,
        W: Fn(&V) -> String + Send + Sync + 'static,
    {
        let span = span_for(accessor.name(), start, length)?;
        self.define_at_with(accessor, span, read, write)
    }

    /// Checks that the fields tile the line in declaration order: each field
    /// starts exactly where the previous one ends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] naming the first field that leaves a gap or
    /// overlaps its predecessor, or if no field is defined.
    pub fn validate_definitions(&self) -> Result<()> {
        let mut definitions = self.definitions.iter();
        let first = definitions
            .next()
            .ok_or_else(|| Error::definition("<none>", "codec has no field definitions"))?;

        let mut expected = first.locator().end();
        for definition in definitions {
            let span = definition.locator();
            if span.start != expected {
                return Err(Error::definition(
                    definition.name(),
                    format!(
                        "starts at {} but the previous field ends at {expected}",
                        span.start
                    ),
                ));
            }
            expected = span.end();
        }

        tracing::debug!(
            fields = self.definitions.len(),
            width = expected,
            "fixed-width layout validated"
        );
        Ok(())
    }

    /// Line width implied by the definitions: the end of the furthest field.
    #[must_use]
    pub fn width(&self) -> usize {
        self.definitions
            .iter()
            .map(|d| d.locator().end())
            .max()
            .unwrap_or(0)
    }
}

impl<T: 'static> Default for Codec<T, FixedWidth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'c, T, V> FieldBuilder<'c, T, V, Span>
where
    T: 'static,
    V: fmt::Debug + 'static,
{
    /// Pads (or truncates) the written text to the field length.
    ///
    /// Applies to whatever the current write conversion produces, so it works
    /// for fields registered with `define_with` and after a custom
    /// `with_write_converter`. An absent optional value becomes a run of fill
    /// characters. Setting a write converter afterwards replaces the padding.
    pub fn with_write_padding(self, pad: Padding) -> Self {
        let length = self.locator().length;
        self.map_written(move |text| pad.apply(&text, length))
    }

    pub fn with_write_left_padder(self, fill: char) -> Self {
        self.with_write_padding(Padding::Left(fill))
    }

    pub fn with_write_right_padder(self, fill: char) -> Self {
        self.with_write_padding(Padding::Right(fill))
    }

    pub fn with_write_zero_left_padder(self) -> Self {
        self.with_write_padding(Padding::ZERO_LEFT)
    }

    pub fn with_write_zero_right_padder(self) -> Self {
        self.with_write_padding(Padding::ZERO_RIGHT)
    }

    pub fn with_write_space_left_padder(self) -> Self {
        self.with_write_padding(Padding::SPACE_LEFT)
    }

    pub fn with_write_space_right_padder(self) -> Self {
        self.with_write_padding(Padding::SPACE_RIGHT)
    }
}
