//! Logical-line segmentation.
//!
//! A logical line ends at `\n`, `\r\n` or `\r` found outside a quoted
//! field. Terminators inside a quoted field belong to the field and are
//! normalized to `\n`.
//!
//! A quote opens a field only at the start of a line or right after the
//! delimiter, the same rule `FieldScanner` applies. Inside an open field
//! `""` is an escaped quote and a lone `"` closes it; any other quote is
//! plain text.
use std::borrow::Cow;

use crate::options::QUOTE;

pub struct LogicalLines<'a> {
    rest: Option<&'a str>,
    delim: char,
    quote_aware: bool,
}

/// Split `doc` into logical lines.
///
/// Always yields at least one line; an empty document is one empty line.
/// With `quote_aware` off, quotes are ordinary text and every terminator
/// ends a line. An unterminated quote keeps the rest of the document in
/// one logical line.
pub fn logical_lines(doc: &str, delim: char, quote_aware: bool) -> LogicalLines<'_> {
    LogicalLines {
        rest: Some(doc),
        delim,
        quote_aware,
    }
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn next_special(b: &[u8], from: usize) -> Option<usize> {
    memchr::memchr3(QUOTE as u8, b'\n', b'\r', &b[from..]).map(|rel| from + rel)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn next_special(b: &[u8], from: usize) -> Option<usize> {
    b[from..]
        .iter()
        .position(|&c| c == QUOTE as u8 || c == b'\n' || c == b'\r')
        .map(|rel| from + rel)
}

fn normalize(line: &str, embedded_cr: bool) -> Cow<'_, str> {
    if embedded_cr {
        Cow::Owned(line.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(line)
    }
}

impl<'a> Iterator for LogicalLines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        let b = rest.as_bytes();
        let mut in_quote = false;
        let mut embedded_cr = false;
        let mut i = 0usize;
        while let Some(idx) = next_special(b, i) {
            match b[idx] {
                c if c == QUOTE as u8 => {
                    if in_quote {
                        if b.get(idx + 1) == Some(&(QUOTE as u8)) {
                            i = idx + 2;
                            continue;
                        }
                        in_quote = false;
                    } else if self.quote_aware
                        && (idx == 0 || rest[..idx].ends_with(self.delim))
                    {
                        in_quote = true;
                    }
                }
                b'\r' if in_quote => embedded_cr = true,
                b'\n' if in_quote => {}
                term => {
                    let skip = if term == b'\r' && b.get(idx + 1) == Some(&b'\n') {
                        2
                    } else {
                        1
                    };
                    self.rest = Some(&rest[idx + skip..]);
                    return Some(normalize(&rest[..idx], embedded_cr));
                }
            }
            i = idx + 1;
        }
        self.rest = None;
        Some(normalize(rest, embedded_cr))
    }
}
