#![doc = include_str!("../README.md")]

pub mod decode;
pub mod encode;
pub mod error;
mod number;
pub mod options;
pub mod value;

pub use crate::error::{Error, Result};
pub use crate::options::{Delimiter, Options};
pub use crate::value::{Field, Number, Record, Row, Table};

#[cfg(feature = "json")]
use serde::{Serialize, de::DeserializeOwned};

/// Parse a document into rows, or into records when `return_object` is set.
pub fn parse(input: &str, options: &Options) -> Result<Table> {
    decode::parser::parse_to_table(input, options)
}

/// Parse a document into positional rows, ignoring `return_object`.
pub fn parse_rows(input: &str, options: &Options) -> Result<Vec<Row>> {
    decode::parser::parse_to_rows(input, options)
}

/// Parse a document into header-keyed records, ignoring `return_object`.
pub fn parse_records(input: &str, options: &Options) -> Result<Vec<Record>> {
    decode::parser::parse_to_records(input, options)
}

/// Like [`parse`] for a byte source; the bytes must be UTF-8.
pub fn parse_bytes(input: &[u8], options: &Options) -> Result<Table> {
    let s = core::str::from_utf8(input)?;
    parse(s, options)
}

/// Write text rows, one line per row, each terminated by `\n`.
pub fn stringify<S: AsRef<str>>(rows: &[Vec<S>], options: &Options) -> Result<String> {
    encode::encode_text_rows(rows, options)
}

/// Write tagged fields; only [`Field::Text`] is ever quoted.
pub fn stringify_fields(rows: &[Vec<Field>], options: &Options) -> Result<String> {
    encode::encode_field_rows(rows, options)
}

#[cfg(feature = "json")]
pub fn encode_to_string<T: Serialize>(value: &T, options: &Options) -> Result<String> {
    let v = serde_json::to_value(value)?;
    let rows = encode::json::rows_from_value(&v)?;
    stringify_fields(&rows, options)
}

#[cfg(feature = "json")]
pub fn decode_from_str<T: DeserializeOwned>(s: &str, options: &Options) -> Result<T> {
    let v = parse(s, options)?.to_json();
    let t = serde_json::from_value(v)?;
    Ok(t)
}
