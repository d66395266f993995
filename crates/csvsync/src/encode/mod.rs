//! Stringify: rows of fields to CSV text.

#[cfg(feature = "json")]
pub mod json;
pub mod primitives;
pub mod writer;

use crate::{Result, options::Options, value::Field};

pub fn encode_text_rows<S: AsRef<str>>(rows: &[Vec<S>], opts: &Options) -> Result<String> {
    opts.validate()?;
    let mut w = writer::RowWriter::new(opts);
    for row in rows {
        w.text_row(row);
    }
    Ok(finish(w))
}

pub fn encode_field_rows(rows: &[Vec<Field>], opts: &Options) -> Result<String> {
    opts.validate()?;
    let mut w = writer::RowWriter::new(opts);
    for row in rows {
        w.field_row(row);
    }
    Ok(finish(w))
}

fn finish(w: writer::RowWriter) -> String {
    let rows = w.rows();
    let out = w.into_string();
    tracing::debug!(rows, bytes = out.len(), "stringified csv");
    out
}
