//! Field definitions and their fluent builder.
//!
//! A [`FieldDefinition`] is the declarative unit of a codec: a member binding,
//! a locator (a [`Span`](crate::Span) or a [`Column`](crate::Column)), an optional
//! validator and the read/write conversions. The member type is erased once the
//! definition is built, so definitions for members of different types share one
//! list; the typed [`FieldBuilder`] returned by `define` is the only place the
//! member type is still known.

use crate::accessor::Accessor;
use crate::convert::FieldType;
use crate::error::{BoxError, Error, Result};
use std::fmt;

type Validator = Box<dyn Fn(&str) -> bool + Send + Sync>;
type ReadFn<T> = Box<dyn Fn(&str, &mut T) -> Result<()> + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&T) -> Result<String> + Send + Sync>;

/// One binding between a record member and its place in a line.
pub struct FieldDefinition<T, L> {
    name: &'static str,
    locator: L,
    validator: Option<Validator>,
    read: ReadFn<T>,
    write: WriteFn<T>,
}

impl<T: 'static, L> FieldDefinition<T, L> {
    /// Creates a definition using the member type's built-in conversions.
    pub(crate) fn new<V: FieldType>(accessor: Accessor<T, V>, locator: L) -> Self {
        FieldDefinition {
            name: accessor.name(),
            locator,
            validator: None,
            read: bind_read(accessor, V::from_field),
            write: bind_write(accessor, V::to_field, |value: &V| Ok(value.to_field())),
        }
    }

    /// Creates a definition with caller-supplied conversions.
    pub(crate) fn with_converters<V, R, RE, W>(
        accessor: Accessor<T, V>,
        locator: L,
        read: R,
        write: W,
    ) -> Self
    where
        V: fmt::Debug + 'static,
        R: Fn(&str) -> std::result::Result<V, RE> + Send + Sync + 'static,
        RE: Into<BoxError>,
        W: Fn(&V) -> String + Send + Sync + 'static,
    {
        FieldDefinition {
            name: accessor.name(),
            locator,
            validator: None,
            read: bind_read(accessor, move |raw: &str| read(raw).map_err(Into::into)),
            write: bind_write(accessor, debug_text::<V>, move |value: &V| Ok(write(value))),
        }
    }
}

impl<T, L> FieldDefinition<T, L> {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Validates `raw`, converts it and stores the result in `record`.
    pub(crate) fn read_into(&self, raw: &str, record: &mut T) -> Result<()> {
        if let Some(validator) = &self.validator {
            if !validator(raw) {
                return Err(Error::value(self.name, raw, "rejected by validator"));
            }
        }
        (self.read)(raw, record)
    }

    /// Converts the member's current value to text.
    pub(crate) fn write_from(&self, record: &T) -> Result<String> {
        (self.write)(record)
    }
}

impl<T, L: fmt::Debug> fmt::Debug for FieldDefinition<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDefinition")
            .field("name", &self.name)
            .field("locator", &self.locator)
            .field("validated", &self.validator.is_some())
            .finish_non_exhaustive()
    }
}

fn bind_read<T, V, F>(accessor: Accessor<T, V>, convert: F) -> ReadFn<T>
where
    T: 'static,
    V: 'static,
    F: Fn(&str) -> std::result::Result<V, BoxError> + Send + Sync + 'static,
{
    Box::new(move |raw: &str, record: &mut T| {
        let value = convert(raw).map_err(|e| Error::conversion(accessor.name(), raw, e))?;
        accessor.set(record, value);
        Ok(())
    })
}

/// Text shown for a member value in write errors, when it has no built-in conversion.
pub(crate) fn debug_text<V: fmt::Debug>(value: &V) -> String {
    format!("{value:?}")
}

fn bind_write<T, V, F>(
    accessor: Accessor<T, V>,
    describe: fn(&V) -> String,
    render: F,
) -> WriteFn<T>
where
    T: 'static,
    V: 'static,
    F: Fn(&V) -> std::result::Result<String, BoxError> + Send + Sync + 'static,
{
    Box::new(move |record: &T| {
        let value = accessor.get(record);
        render(value).map_err(|e| Error::conversion(accessor.name(), &describe(value), e))
    })
}

/// Fluent builder for the definition just registered with `define`.
///
/// Each method replaces one part of the definition and returns the builder, so
/// calls chain. Layout-specific methods (padders for fixed-width fields) are
/// provided by the layout modules.
pub struct FieldBuilder<'c, T, V, L> {
    definition: &'c mut FieldDefinition<T, L>,
    accessor: Accessor<T, V>,
    describe: fn(&V) -> String,
}

impl<'c, T, V, L> FieldBuilder<'c, T, V, L>
where
    T: 'static,
    V: fmt::Debug + 'static,
{
    pub(crate) fn new(
        definition: &'c mut FieldDefinition<T, L>,
        accessor: Accessor<T, V>,
        describe: fn(&V) -> String,
    ) -> Self {
        FieldBuilder {
            definition,
            accessor,
            describe,
        }
    }

    /// Rejects raw text for which `validator` returns `false`, before conversion.
    pub fn with_validator<F>(self, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.definition.validator = Some(Box::new(validator));
        self
    }

    /// Replaces the read conversion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_record::{field, SeparatorCodec};
    ///
    /// #[derive(Default)]
    /// struct Reading { celsius: f64 }
    ///
    /// let mut codec = SeparatorCodec::<Reading>::new(';');
    /// codec
    ///     .define(field!(Reading, celsius), 0)
    ///     .unwrap()
    ///     .with_read_converter(|s| s.replace(',', ".").parse::<f64>());
    ///
    /// assert_eq!(codec.parse("21,5").unwrap().celsius, 21.5);
    /// ```
    pub fn with_read_converter<F, E>(self, converter: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<V, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.definition.read = bind_read(self.accessor, move |raw: &str| {
            converter(raw).map_err(Into::into)
        });
        self
    }

    /// Replaces the write conversion.
    pub fn with_write_converter<F>(self, converter: F) -> Self
    where
        F: Fn(&V) -> String + Send + Sync + 'static,
    {
        self.definition.write =
            bind_write(self.accessor, self.describe, move |value: &V| Ok(converter(value)));
        self
    }

    /// Replaces the write conversion with one that can fail.
    pub fn try_with_write_converter<F, E>(self, converter: F) -> Self
    where
        F: Fn(&V) -> std::result::Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.definition.write = bind_write(self.accessor, self.describe, move |value: &V| {
            converter(value).map_err(Into::into)
        });
        self
    }

    /// Post-processes whatever the current write conversion produces.
    pub(crate) fn map_written<F>(self, map: F) -> Self
    where
        F: Fn(String) -> String + Send + Sync + 'static,
    {
        let placeholder: WriteFn<T> = Box::new(|_: &T| Ok(String::new()));
        let write = std::mem::replace(&mut self.definition.write, placeholder);
        self.definition.write = Box::new(move |record: &T| write(record).map(&map));
        self
    }

    pub(crate) fn locator(&self) -> &L {
        &self.definition.locator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug)]
    struct Item {
        qty: u32,
    }

    fn qty() -> Accessor<Item, u32> {
        Accessor::new("qty", |i: &Item| &i.qty, |i, v| i.qty = v)
    }

    #[derive(Debug, Default, Clone, Copy, PartialEq)]
    enum Shade {
        #[default]
        Light,
        Dark,
    }

    #[derive(Default, Debug)]
    struct Tag {
        label: String,
        shade: Shade,
    }

    fn shade() -> Accessor<Tag, Shade> {
        Accessor::new("shade", |t: &Tag| &t.shade, |t, v| t.shade = v)
    }

    #[test]
    fn test_default_conversions() {
        let def = FieldDefinition::new(qty(), ());
        let mut item = Item::default();
        def.read_into(" 12", &mut item).unwrap();
        assert_eq!(item.qty, 12);
        assert_eq!(def.write_from(&item).unwrap(), "12");
    }

    #[test]
    fn test_conversion_failure_names_field_and_value() {
        let def = FieldDefinition::new(qty(), ());
        let err = def.read_into("twelve", &mut Item::default()).unwrap_err();
        match err {
            Error::Value { field, value, source, .. } => {
                assert_eq!(field, "qty");
                assert_eq!(value, "twelve");
                assert!(source.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_builder_replaces_parts() {
        let mut def = FieldDefinition::new(qty(), ());
        FieldBuilder::new(&mut def, qty(), u32::to_field)
            .with_validator(|s| s.starts_with('#'))
            .with_read_converter(|s| s[1..].parse::<u32>())
            .with_write_converter(|v| format!("#{v}"));

        let mut item = Item::default();
        assert!(def.read_into("5", &mut item).is_err());
        def.read_into("#5", &mut item).unwrap();
        assert_eq!(item.qty, 5);
        assert_eq!(def.write_from(&item).unwrap(), "#5");
    }

    #[test]
    fn test_failing_write_converter() {
        let mut def = FieldDefinition::new(qty(), ());
        FieldBuilder::new(&mut def, qty(), u32::to_field).try_with_write_converter(|v| {
            if *v > 99 {
                Err("too large")
            } else {
                Ok(v.to_string())
            }
        });

        let err = def.write_from(&Item { qty: 100 }).unwrap_err();
        assert_eq!(err.field(), Some("qty"));
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_write_error_quotes_value_once() {
        let label = Accessor::new("label", |t: &Tag| &t.label, |t, v| t.label = v);
        let mut def = FieldDefinition::new(label, ());
        FieldBuilder::new(&mut def, label, String::to_field)
            .try_with_write_converter(|_: &String| Err::<String, _>("nope"));

        let err = def.write_from(&Tag { label: "Ann".to_string(), ..Default::default() }).unwrap_err();
        match &err {
            Error::Value { value, .. } => assert_eq!(value, "Ann"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.to_string(), "invalid value for `label`: \"Ann\" (nope)");
    }

    #[test]
    fn test_write_error_without_builtin_conversion_uses_debug() {
        let mut def = FieldDefinition::with_converters(
            shade(),
            (),
            |_: &str| Ok::<_, BoxError>(Shade::Dark),
            |_: &Shade| String::new(),
        );
        FieldBuilder::new(&mut def, shade(), debug_text::<Shade>)
            .try_with_write_converter(|_: &Shade| Err::<String, _>("unsupported"));

        let err = def.write_from(&Tag::default()).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for `shade`: \"Light\" (unsupported)");
    }

    #[test]
    fn test_map_written_wraps_current_converter() {
        let mut def = FieldDefinition::new(qty(), ());
        FieldBuilder::new(&mut def, qty(), u32::to_field)
            .with_write_converter(|v| format!("{v:x}"))
            .map_written(|text| format!("<{text}>"));

        assert_eq!(def.write_from(&Item { qty: 255 }).unwrap(), "<ff>");
    }

    #[test]
    fn test_custom_converters() {
        let def = FieldDefinition::with_converters(
            qty(),
            (),
            |s: &str| u32::from_str_radix(s, 16),
            |v: &u32| format!("{v:x}"),
        );
        let mut item = Item::default();
        def.read_into("ff", &mut item).unwrap();
        assert_eq!(item.qty, 255);
        assert_eq!(def.write_from(&item).unwrap(), "ff");
    }
}
