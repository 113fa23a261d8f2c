//! Built-in conversions between field text and typed values.
//!
//! A field whose member type implements [`FieldType`] can be registered without
//! converters: the codec reads it with [`FieldType::from_field`] and writes it
//! with [`FieldType::to_field`]. Types outside this table need explicit
//! converters (see [`Codec::define_with`](crate::FixedWidthCodec::define_with)),
//! or a `FieldType` impl of their own.
//!
//! | Type | Reading | Writing |
//! |------|---------|---------|
//! | `String` | verbatim | verbatim |
//! | integers | trimmed, decimal | decimal |
//! | `f32`, `f64` | trimmed | shortest round-trip form |
//! | `bool` | trimmed, `true`/`false` in any case | `true`/`false` |
//! | `char` | exactly one character | the character |
//! | `NaiveDate` | `YYYY-MM-DD` | `YYYY-MM-DD` |
//! | `NaiveTime` | `HH:MM:SS[.f]` | `HH:MM:SS[.f]` |
//! | `NaiveDateTime` | `YYYY-MM-DDTHH:MM:SS[.f]` | same |
//! | `DateTime<Utc>` | RFC 3339 | RFC 3339 |
//! | `BigInt` | trimmed, decimal | decimal |
//! | `Option<V>` | blank text is `None` | `None` is empty |
//!
//! ## Examples
//!
//! ```rust
//! use line_record::FieldType;
//!
//! assert_eq!(u32::from_field(" 025").unwrap(), 25);
//! assert!(bool::from_field("TRUE").unwrap());
//! assert_eq!(Option::<i64>::from_field("   ").unwrap(), None);
//! assert_eq!(7u8.to_field(), "7");
//! ```

use crate::error::BoxError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use num_bigint::BigInt;
use std::fmt;

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const TIME_FORMAT: &str = "%H:%M:%S%.f";

/// A value type with a default text conversion.
pub trait FieldType: Sized + fmt::Debug + 'static {
    /// Converts raw field text into a value.
    ///
    /// # Errors
    ///
    /// Returns the parse failure when `raw` is not a valid representation.
    fn from_field(raw: &str) -> Result<Self, BoxError>;

    /// Returns the default text form of the value.
    fn to_field(&self) -> String;

    /// Whether the value stands for "no value" (padders fill such fields entirely).
    fn is_absent(&self) -> bool {
        false
    }
}

impl FieldType for String {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        Ok(raw.to_string())
    }

    fn to_field(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_field_type_trimmed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn from_field(raw: &str) -> Result<Self, BoxError> {
                    Ok(raw.trim().parse::<$ty>()?)
                }

                fn to_field(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_field_type_trimmed!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, BigInt,
);

impl FieldType for bool {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(format!("expected `true` or `false`, found {raw:?}").into())
        }
    }

    fn to_field(&self) -> String {
        self.to_string()
    }
}

impl FieldType for char {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(format!("expected exactly one character, found {raw:?}").into()),
        }
    }

    fn to_field(&self) -> String {
        self.to_string()
    }
}

impl FieldType for NaiveDate {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        Ok(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")?)
    }

    fn to_field(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl FieldType for NaiveTime {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        Ok(NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)?)
    }

    fn to_field(&self) -> String {
        self.format(TIME_FORMAT).to_string()
    }
}

impl FieldType for NaiveDateTime {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        Ok(NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT)?)
    }

    fn to_field(&self) -> String {
        self.format(DATETIME_FORMAT).to_string()
    }
}

impl FieldType for DateTime<Utc> {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        Ok(DateTime::parse_from_rfc3339(raw.trim())?.with_timezone(&Utc))
    }

    fn to_field(&self) -> String {
        self.to_rfc3339()
    }
}

impl<V: FieldType> FieldType for Option<V> {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        if raw.trim().is_empty() {
            Ok(None)
        } else {
            V::from_field(raw).map(Some)
        }
    }

    fn to_field(&self) -> String {
        self.as_ref().map(FieldType::to_field).unwrap_or_default()
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }
}
