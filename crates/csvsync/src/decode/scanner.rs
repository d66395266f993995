//! Single-pass field scanner for one logical line.
use std::borrow::Cow;

use crate::options::QUOTE;

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_char(s: &str, ch: char) -> Option<usize> {
    if ch.is_ascii() {
        memchr::memchr(ch as u8, s.as_bytes())
    } else {
        s.find(ch)
    }
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_char(s: &str, ch: char) -> Option<usize> {
    s.find(ch)
}

/// Iterator over the raw fields of a logical line.
///
/// Outside quotes a field runs to the next delimiter. A field starting
/// with `"` runs to the matching closing quote, with `""` standing for a
/// literal quote; any text between the closing quote and the next
/// delimiter is appended as-is. A quote that is never closed makes the
/// field run to the end of the line.
///
/// The scanner always yields at least one field, so an empty line is one
/// empty field and a trailing delimiter yields a trailing empty field.
#[derive(Debug, Clone)]
pub struct FieldScanner<'a> {
    line: &'a str,
    pos: usize,
    delim: char,
    quote_aware: bool,
    done: bool,
    unterminated: bool,
}

impl<'a> FieldScanner<'a> {
    pub fn new(line: &'a str, delim: char, quote_aware: bool) -> Self {
        Self {
            line,
            pos: 0,
            delim,
            quote_aware,
            done: false,
            unterminated: false,
        }
    }

    /// True once a field without a closing quote has been scanned.
    pub fn saw_unterminated_quote(&self) -> bool {
        self.unterminated
    }

    /// Scan a quoted field; `rest` starts at the opening quote.
    /// Returns the unescaped body and the offset just past the closing quote.
    fn quoted(&mut self, rest: &'a str) -> (Cow<'a, str>, usize) {
        let mut owned: Option<String> = None;
        let mut seg_start = QUOTE.len_utf8();
        let mut i = seg_start;
        loop {
            let Some(rel) = find_char(&rest[i..], QUOTE) else {
                self.unterminated = true;
                return (join(owned, &rest[seg_start..]), rest.len());
            };
            let q = i + rel;
            if rest[q + 1..].starts_with(QUOTE) {
                owned
                    .get_or_insert_with(String::new)
                    .push_str(&rest[seg_start..=q]);
                seg_start = q + 2;
                i = seg_start;
            } else {
                return (join(owned, &rest[seg_start..q]), q + 1);
            }
        }
    }
}

fn join<'a>(owned: Option<String>, tail: &'a str) -> Cow<'a, str> {
    match owned {
        Some(mut buf) => {
            buf.push_str(tail);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(tail),
    }
}

impl<'a> Iterator for FieldScanner<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let line = self.line;
        let rest = &line[self.pos..];
        let quoted = self.quote_aware && rest.starts_with(QUOTE);
        let (mut field, body_end) = if quoted {
            self.quoted(rest)
        } else {
            (Cow::Borrowed(""), 0)
        };
        let end = find_char(&rest[body_end..], self.delim)
            .map_or(rest.len(), |rel| body_end + rel);
        if end > body_end {
            let tail = &rest[body_end..end];
            if quoted {
                field.to_mut().push_str(tail);
            } else {
                field = Cow::Borrowed(tail);
            }
        }
        if end < rest.len() {
            self.pos += end + self.delim.len_utf8();
        } else {
            self.done = true;
        }
        Some(field)
    }
}
