//! The generic parse/write engine shared by every line format.
//!
//! A [`Codec`] owns an ordered list of [`FieldDefinition`]s and a [`Layout`].
//! The layout decides how a line is split into per-field text and how written
//! fields are joined; the codec runs the same loop for every layout:
//!
//! 1. [`Layout::initialize`] prepares call-scoped input from the line
//! 2. for each definition, in declaration order, [`Layout::extract`] returns
//!    the raw text, which is validated, converted and stored in a fresh record
//!
//! Writing reads each member, converts it to text and hands the text to
//! [`Layout::emit`]. The first failing field aborts the call; no partial record
//! or line is returned.
//!
//! The per-call input is a local value of `parse`, never codec state, so one
//! codec can serve any number of threads at once.

use crate::accessor::Accessor;
use crate::convert::FieldType;
use crate::definition::{debug_text, FieldBuilder, FieldDefinition};
use crate::error::{BoxError, Error, Result};
use serde::Serialize;
use std::fmt;

/// Format-specific half of a codec.
pub trait Layout {
    /// Where a field lives in a line.
    type Locator: fmt::Debug;

    /// Line prepared for extraction, borrowed from the parsed text.
    type Input<'a>;

    /// Prepares `text` for a sequence of [`extract`](Layout::extract) calls.
    fn initialize<'a>(&self, text: &'a str) -> Self::Input<'a>;

    /// Returns the raw text at `locator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] naming `field` when the locator falls outside the input.
    fn extract<'a>(
        &self,
        input: &Self::Input<'a>,
        locator: &Self::Locator,
        field: &str,
    ) -> Result<&'a str>;

    /// Appends one converted field to the output line.
    fn emit(&self, value: &str, out: &mut String);
}

/// Name and locator of one field, as exposed by [`Codec::fields`].
///
/// Serializable, so a codec's layout can be exported:
///
/// ```rust
/// use line_record::{field, FixedWidthCodec};
///
/// #[derive(Default)]
/// struct Person { name: String, age: u32 }
///
/// let mut codec = FixedWidthCodec::<Person>::new();
/// codec.define(field!(Person, name), 0, 10).unwrap();
/// codec.define(field!(Person, age), 10, 3).unwrap();
///
/// let layout: Vec<_> = codec.fields().collect();
/// assert_eq!(layout[1].name, "age");
/// assert_eq!(layout[1].locator.start, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldLayout<'c, L> {
    pub name: &'static str,
    #[serde(flatten)]
    pub locator: &'c L,
}

/// Declarative codec between records of type `T` and lines of layout `L`.
///
/// Use the aliases [`FixedWidthCodec`](crate::FixedWidthCodec) and
/// [`SeparatorCodec`](crate::SeparatorCodec) for the built-in formats, or
/// [`Codec::with_layout`] with a custom [`Layout`].
pub struct Codec<T, L: Layout> {
    pub(crate) layout: L,
    pub(crate) definitions: Vec<FieldDefinition<T, L::Locator>>,
}

impl<T: 'static, L: Layout> Codec<T, L> {
    /// Creates a codec with no fields for a custom layout.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_record::{field, Codec, Layout, Result};
    ///
    /// /// Whitespace-separated words, addressed by position.
    /// struct Words;
    ///
    /// impl Layout for Words {
    ///     type Locator = usize;
    ///     type Input<'a> = Vec<&'a str>;
    ///
    ///     fn initialize<'a>(&self, text: &'a str) -> Self::Input<'a> {
    ///         text.split_whitespace().collect()
    ///     }
    ///
    ///     fn extract<'a>(
    ///         &self,
    ///         input: &Self::Input<'a>,
    ///         locator: &usize,
    ///         field: &str,
    ///     ) -> Result<&'a str> {
    ///         input
    ///             .get(*locator)
    ///             .copied()
    ///             .ok_or_else(|| line_record::Error::value(field, "", "missing word"))
    ///     }
    ///
    ///     fn emit(&self, value: &str, out: &mut String) {
    ///         if !out.is_empty() {
    ///             out.push(' ');
    ///         }
    ///         out.push_str(value);
    ///     }
    /// }
    ///
    /// #[derive(Default)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let mut codec = Codec::<Point, Words>::with_layout(Words);
    /// codec.define_at(field!(Point, x), 0)?;
    /// codec.define_at(field!(Point, y), 1)?;
    ///
    /// let point = codec.parse("  3   -4 ")?;
    /// assert_eq!((point.x, point.y), (3, -4));
    /// assert_eq!(codec.write(&point)?, "3 -4");
    /// # Ok::<(), line_record::Error>(())
    /// ```
    #[must_use]
    pub fn with_layout(layout: L) -> Self {
        Codec {
            layout,
            definitions: Vec::new(),
        }
    }

    /// Registers a field at `locator` using the member type's built-in conversions.
    ///
    /// Format-specific `define` methods check their locator first and then
    /// delegate here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] if the accessor does not name a record member.
    pub fn define_at<V: FieldType>(
        &mut self,
        accessor: Accessor<T, V>,
        locator: L::Locator,
    ) -> Result<FieldBuilder<'_, T, V, L::Locator>> {
        accessor.resolve()?;
        let definition = self.push(FieldDefinition::new(accessor, locator));
        Ok(FieldBuilder::new(definition, accessor, V::to_field))
    }

    /// Registers a field at `locator` with caller-supplied conversions.
    ///
    /// # Errors
    ///
    /// Same as [`define_at`](Self::define_at).
    pub fn define_at_with<V, R, RE, W>(
        &mut self,
        accessor: Accessor<T, V>,
        locator: L::Locator,
        read: R,
        write: W,
    ) -> Result<FieldBuilder<'_, T, V, L::Locator>>
    where
        V: fmt::Debug + 'static,
        R: Fn(&str) -> std::result::Result<V, RE> + Send + Sync + 'static,
        RE: Into<BoxError>,
        W: Fn(&V) -> String + Send + Sync + 'static,
    {
        accessor.resolve()?;
        let definition =
            self.push(FieldDefinition::with_converters(accessor, locator, read, write));
        Ok(FieldBuilder::new(definition, accessor, debug_text::<V>))
    }

    /// Appends a definition and returns it for the builder.
    fn push(
        &mut self,
        definition: FieldDefinition<T, L::Locator>,
    ) -> &mut FieldDefinition<T, L::Locator> {
        tracing::debug!(
            field = definition.name(),
            locator = ?definition.locator(),
            position = self.definitions.len(),
            "registered field"
        );
        self.definitions.push(definition);
        let last = self.definitions.len() - 1;
        &mut self.definitions[last]
    }

    /// Number of defined fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterates over the defined fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = FieldLayout<'_, L::Locator>> + '_ {
        self.definitions.iter().map(|d| FieldLayout {
            name: d.name(),
            locator: d.locator(),
        })
    }

    fn ensure_defined(&self) -> Result<()> {
        if self.definitions.is_empty() {
            return Err(Error::definition("<none>", "codec has no field definitions"));
        }
        Ok(())
    }

    /// Parses one line into a new record.
    ///
    /// Accepts `&str` or `Option<&str>`; `None` fails with [`Error::Argument`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] for the first field that is out of range,
    /// rejected by its validator, or fails to convert.
    pub fn parse<'a>(&self, text: impl Into<Option<&'a str>>) -> Result<T>
    where
        T: Default,
    {
        let text = text.into().ok_or(Error::argument("text"))?;
        self.ensure_defined()?;
        tracing::trace!(fields = self.definitions.len(), len = text.len(), "parsing line");

        let input = self.layout.initialize(text);
        let mut record = T::default();
        for definition in &self.definitions {
            let raw = self
                .layout
                .extract(&input, definition.locator(), definition.name())?;
            definition.read_into(raw, &mut record).map_err(|e| {
                tracing::debug!(field = definition.name(), error = %e, "field rejected");
                e
            })?;
        }
        Ok(record)
    }

    /// Writes a record as one line.
    ///
    /// Accepts `&T` or `Option<&T>`; `None` fails with [`Error::Argument`].
    /// The record is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Value`] for the first field whose write conversion fails.
    pub fn write<'r>(&self, record: impl Into<Option<&'r T>>) -> Result<String> {
        let record = record.into().ok_or(Error::argument("record"))?;
        self.ensure_defined()?;
        tracing::trace!(fields = self.definitions.len(), "writing record");

        let mut out = String::with_capacity(64);
        for definition in &self.definitions {
            let text = definition.write_from(record)?;
            self.layout.emit(&text, &mut out);
        }
        Ok(out)
    }
}

impl<T, L> fmt::Debug for Codec<T, L>
where
    L: Layout + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Codec")
            .field("layout", &self.layout)
            .field("definitions", &self.definitions)
            .finish()
    }
}
