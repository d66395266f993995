use crate::encode::primitives::{format_bool, format_text_into};
use crate::options::Options;
use crate::value::Field;

/// Accumulates output text one row at a time.
///
/// Every row, the last one included, is terminated with `\n`.
pub struct RowWriter {
    out: String,
    delim: char,
    quote_all: bool,
    rows: usize,
}

impl RowWriter {
    pub fn new(opts: &Options) -> Self {
        Self {
            out: String::new(),
            delim: opts.delimiter.as_char(),
            quote_all: opts.quote_all,
            rows: 0,
        }
    }

    fn write_text(&mut self, s: &str) {
        format_text_into(&mut self.out, s, self.delim, self.quote_all);
    }

    fn write_field(&mut self, field: &Field) {
        match field {
            Field::Text(s) => self.write_text(s),
            Field::Number(n) => {
                use core::fmt::Write as _;
                let _ = write!(self.out, "{}", n);
            }
            Field::Bool(b) => self.out.push_str(format_bool(*b)),
            Field::Null => {}
        }
    }

    fn separate(&mut self, idx: usize) {
        if idx > 0 {
            self.out.push(self.delim);
        }
    }

    pub fn text_row<S: AsRef<str>>(&mut self, row: &[S]) {
        for (i, s) in row.iter().enumerate() {
            self.separate(i);
            self.write_text(s.as_ref());
        }
        self.end_row();
    }

    pub fn field_row(&mut self, row: &[Field]) {
        for (i, f) in row.iter().enumerate() {
            self.separate(i);
            self.write_field(f);
        }
        self.end_row();
    }

    fn end_row(&mut self) {
        self.out.push('\n');
        self.rows += 1;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn into_string(self) -> String {
        self.out
    }
}
