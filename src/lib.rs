//! # line_record
//!
//! Declarative codecs between Rust records and flat text lines.
//!
//! ## What does it do?
//!
//! Many systems still exchange data as one record per line, either in
//! **fixed-width** form (every field at a known character offset) or in
//! **delimited** form (fields separated by one character). This library lets you
//! declare, once per record type, which member lives where and how it converts,
//! and then parse and write lines any number of times.
//!
//! ## Key Features
//!
//! - **Declarative**: fields are bound with a compile-checked [`field!`] accessor
//! - **Two formats**: [`FixedWidthCodec`] and [`SeparatorCodec`] share one engine
//! - **Conversions**: built-in for strings, numbers, booleans, dates and `Option`;
//!   custom read/write converters for anything else
//! - **Padding**: zero/space, left/right padders that never overflow a field
//! - **Thread Safe**: a codec holds no per-call state and can be shared freely
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ### Fixed-width lines
//!
//! ```rust
//! use line_record::{field, FixedWidthCodec};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut codec = FixedWidthCodec::<Person>::new();
//! codec
//!     .define(field!(Person, name), 0, 10)?
//!     .with_write_space_right_padder();
//! codec
//!     .define(field!(Person, age), 10, 3)?
//!     .with_write_zero_left_padder();
//! codec.validate_definitions()?;
//!
//! let person = codec.parse("John      025")?;
//! assert_eq!(person.name.trim_end(), "John");
//! assert_eq!(person.age, 25);
//!
//! let line = codec.write(&Person { name: "Ann".to_string(), age: 7 })?;
//! assert_eq!(line, "Ann       007");
//! # Ok::<(), line_record::Error>(())
//! ```
//!
//! ### Delimited lines
//!
//! ```rust
//! use line_record::{field, SeparatorCodec};
//!
//! #[derive(Default)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let mut codec = SeparatorCodec::<Person>::new(',');
//! codec.define(field!(Person, name), 0)?;
//! codec
//!     .define(field!(Person, age), 1)?
//!     .with_validator(|s| s.chars().all(|c| c.is_ascii_digit()));
//!
//! let person = codec.parse("John,25")?;
//! assert_eq!(person.age, 25);
//!
//! // Every field is followed by the delimiter, the last one included.
//! let line = codec.write(&Person { name: "Ann".to_string(), age: 7 })?;
//! assert_eq!(line, "Ann,7,");
//! # Ok::<(), line_record::Error>(())
//! ```
//!
//! ## Errors
//!
//! - [`Error::Argument`]: `parse(None)` or `write(None)`
//! - [`Error::Definition`]: the codec was declared incorrectly; raised while defining
//! - [`Error::Value`]: a field failed on a given line; names the field and the text
//!
//! ## Concurrency
//!
//! Parsing keeps its working state in the call, not in the codec, so `&Codec`
//! may be used from several threads at once. Define every field before sharing.
//!
//! ## Format Details
//!
//! See the [`formats`] module.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`fixed_width.rs`** - a fixed-width layout with padders and validation
//! - **`delimited.rs`** - tab- and comma-separated lines
//! - **`custom_types.rs`** - dates, enums and custom converters
//!
//! Run any example with: `cargo run --example <name>`

#[macro_use]
pub mod macros;

pub mod accessor;
pub mod codec;
pub mod convert;
pub mod definition;
pub mod error;
pub mod fixed;
pub mod formats;
pub mod options;
pub mod padding;
pub mod separated;

pub use accessor::Accessor;
pub use codec::{Codec, FieldLayout, Layout};
pub use convert::FieldType;
pub use definition::{FieldBuilder, FieldDefinition};
pub use error::{BoxError, Error, Result};
pub use fixed::{FixedWidth, FixedWidthCodec, Span};
pub use options::{Delimiter, Padding};
pub use separated::{Column, Delimited, SeparatorCodec};

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Person {
        name: String,
        age: u32,
    }

    fn fixed() -> FixedWidthCodec<Person> {
        let mut codec = FixedWidthCodec::new();
        codec
            .define(field!(Person, name), 0, 10)
            .unwrap()
            .with_write_space_right_padder();
        codec
            .define(field!(Person, age), 10, 3)
            .unwrap()
            .with_read_converter(|s| s.parse::<u32>())
            .with_write_zero_left_padder();
        codec.validate_definitions().unwrap();
        codec
    }

    fn separated() -> SeparatorCodec<Person> {
        let mut codec = SeparatorCodec::new(',');
        codec.define(field!(Person, name), 0).unwrap();
        codec
            .define(field!(Person, age), 1)
            .unwrap()
            .with_read_converter(|s| s.parse::<u32>());
        codec
    }

    #[test]
    fn test_fixed_parse() {
        let person = fixed().parse("John      025").unwrap();
        assert_eq!(person.name.trim_end(), "John");
        assert_eq!(person.age, 25);
    }

    #[test]
    fn test_fixed_write() {
        let person = Person {
            name: "Ann".to_string(),
            age: 7,
        };
        assert_eq!(fixed().write(&person).unwrap(), "Ann       007");
    }

    #[test]
    fn test_separated_parse() {
        let person = separated().parse("John,25").unwrap();
        assert_eq!(
            person,
            Person {
                name: "John".to_string(),
                age: 25
            }
        );
    }

    #[test]
    fn test_separated_write() {
        let person = Person {
            name: "Ann".to_string(),
            age: 7,
        };
        assert_eq!(separated().write(&person).unwrap(), "Ann,7,");
    }

    #[test]
    fn test_absent_inputs() {
        assert!(matches!(
            fixed().parse(None::<&str>),
            Err(Error::Argument { .. })
        ));
        assert!(matches!(
            fixed().write(None::<&Person>),
            Err(Error::Argument { .. })
        ));
        assert!(matches!(
            separated().parse(None::<&str>),
            Err(Error::Argument { .. })
        ));
        assert!(matches!(
            separated().write(None::<&Person>),
            Err(Error::Argument { .. })
        ));
    }
}
