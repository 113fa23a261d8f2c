//! Custom field types: dates, enums and hand-written converters.
//!
//! Run with: cargo run --example custom_types

use chrono::NaiveDate;
use line_record::{field, BoxError, FieldType, FixedWidthCodec};
use std::error::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum Status {
    #[default]
    Open,
    Closed,
}

// A `FieldType` impl makes the type usable without converters.
impl FieldType for Status {
    fn from_field(raw: &str) -> Result<Self, BoxError> {
        match raw.trim() {
            "O" => Ok(Status::Open),
            "X" => Ok(Status::Closed),
            other => Err(format!("unknown status {other:?}").into()),
        }
    }

    fn to_field(&self) -> String {
        match self {
            Status::Open => "O".to_string(),
            Status::Closed => "X".to_string(),
        }
    }
}

#[derive(Debug, Default, PartialEq)]
struct Ticket {
    number: u32,
    opened: NaiveDate,
    status: Status,
    // Amount in cents, written as a decimal.
    amount: i64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut codec = FixedWidthCodec::<Ticket>::new();
    codec
        .define(field!(Ticket, number), 0, 6)?
        .with_write_zero_left_padder();
    codec
        .define(field!(Ticket, opened), 6, 8)?
        .with_read_converter(|s| NaiveDate::parse_from_str(s, "%Y%m%d"))
        .with_write_converter(|d| d.format("%Y%m%d").to_string());
    codec.define(field!(Ticket, status), 14, 1)?;
    codec
        .define(field!(Ticket, amount), 15, 9)?
        .with_read_converter(|s| -> Result<i64, BoxError> {
            let value: f64 = s.trim().parse()?;
            Ok((value * 100.0).round() as i64)
        })
        .with_write_converter(|cents| format!("{:>9.2}", *cents as f64 / 100.0));
    codec.validate_definitions()?;

    let line = "00031220240301X   125.40";
    let ticket = codec.parse(line)?;
    println!("{ticket:?}");
    assert_eq!(ticket.amount, 12540);
    assert_eq!(codec.write(&ticket)?, line);
    println!("✓ Round-trip successful");

    Ok(())
}
