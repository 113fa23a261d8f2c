//! Delimited records: comma- and tab-separated lines.
//!
//! Run with: cargo run --example delimited

use line_record::{field, Delimiter, SeparatorCodec};
use std::error::Error;

#[derive(Debug, Default, PartialEq)]
struct Reading {
    station: String,
    celsius: f64,
    humidity: Option<u8>,
}

fn codec(delimiter: Delimiter) -> Result<SeparatorCodec<Reading>, line_record::Error> {
    let mut codec = SeparatorCodec::new(delimiter);
    codec
        .define(field!(Reading, station), 0)?
        .with_validator(|s| !s.is_empty());
    codec.define(field!(Reading, celsius), 1)?;
    codec.define(field!(Reading, humidity), 2)?;
    Ok(codec)
}

fn main() -> Result<(), Box<dyn Error>> {
    let csv = codec(Delimiter::Comma)?;
    let tsv = codec(Delimiter::Tab)?;

    for line in ["LYS,21.5,40", "CDG,18.25,"] {
        let reading = csv.parse(line)?;
        println!("{reading:?}");
        // Written lines end with the delimiter.
        println!("  tsv: {:?}", tsv.write(&reading)?);
    }

    match csv.parse(",12.0,50") {
        Ok(_) => unreachable!("empty station is rejected"),
        Err(err) => println!("Rejected: {err}"),
    }

    Ok(())
}
