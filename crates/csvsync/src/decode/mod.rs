//! Parse: CSV text to rows or records.
//!
//! `lines` cuts the document into logical lines, `scanner` splits one line
//! into fields and `parser` ties both to the dialect options.

pub mod lines;
pub mod parser;
pub mod scanner;
