//! Fixed-width records with padders and layout validation.
//!
//! Run with: cargo run --example fixed_width

use line_record::{field, FixedWidthCodec};
use std::error::Error;

#[derive(Debug, Default, PartialEq)]
struct Employee {
    id: u32,
    name: String,
    department: String,
    salary: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut codec = FixedWidthCodec::<Employee>::new();
    codec
        .define(field!(Employee, id), 0, 5)?
        .with_write_zero_left_padder();
    codec
        .define(field!(Employee, name), 5, 16)?
        .with_read_converter(|s| Ok::<_, line_record::Error>(s.trim_end().to_string()))
        .with_write_space_right_padder();
    codec
        .define(field!(Employee, department), 21, 4)?
        .with_write_space_right_padder();
    codec
        .define(field!(Employee, salary), 25, 8)?
        .with_write_space_left_padder();
    codec.validate_definitions()?;

    let lines = [
        "00017Alice Johnson   ENG    98000",
        "00042Bob Smith       OPS    61500",
    ];

    for line in lines {
        let employee = codec.parse(line)?;
        println!("{employee:?}");
        assert_eq!(codec.write(&employee)?, line);
    }
    println!("✓ Round-trip successful");

    // A short line names the field that did not fit.
    if let Err(err) = codec.parse("00099Carol") {
        println!("Rejected: {err}");
    }

    Ok(())
}
