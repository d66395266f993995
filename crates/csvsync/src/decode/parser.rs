use std::borrow::Cow;
use std::collections::HashMap;

use crate::decode::lines::logical_lines;
use crate::decode::scanner::FieldScanner;
use crate::error::Result;
use crate::options::Options;
use crate::value::{Record, Row, Table};

/// Parses whole documents under one dialect.
///
/// The options are only read; header derivation never flips
/// `return_object` on them.
pub struct Parser<'o> {
    opts: &'o Options,
    delim: char,
    quote_aware: bool,
}

impl<'o> Parser<'o> {
    pub fn new(opts: &'o Options) -> Result<Self> {
        opts.validate()?;
        Ok(Self {
            opts,
            delim: opts.delimiter.as_char(),
            quote_aware: !opts.unquoted_fields,
        })
    }

    /// Logical lines that remain after document trimming, `remove_field_quote`
    /// unwrapping and `skip_header`.
    fn lines<'a>(&self, input: &'a str) -> impl Iterator<Item = Cow<'a, str>> {
        let mut lines = logical_lines(trim_document(input), self.delim, self.quote_aware)
            .map(move |line| self.unwrap_field_quotes(line));
        if self.opts.skip_header {
            tracing::trace!("skipping header line");
            lines.next();
        }
        lines
    }

    fn unwrap_field_quotes<'a>(&self, line: Cow<'a, str>) -> Cow<'a, str> {
        let Some(q) = self.opts.remove_field_quote else {
            return line;
        };
        let qlen = q.len_utf8();
        if line.len() < 2 * qlen || !line.starts_with(q) || !line.ends_with(q) {
            return line;
        }
        let inner = &line[qlen..line.len() - qlen];
        let quoted_delim = format!("{q}{d}{q}", d = self.delim);
        let unwrapped = inner.replace(&quoted_delim, self.delim.encode_utf8(&mut [0u8; 4]));
        tracing::trace!(quote = %q, "unwrapped field-quoted line");
        Cow::Owned(unwrapped)
    }

    fn finish_field(&self, raw: Cow<'_, str>) -> String {
        if self.opts.trim {
            raw.trim().to_string()
        } else {
            raw.into_owned()
        }
    }

    fn note_unterminated(scanner: &FieldScanner<'_>, line_idx: usize) {
        if scanner.saw_unterminated_quote() {
            tracing::debug!(line = line_idx, "unterminated quoted field, took rest of line");
        }
    }

    /// Split one logical line into positional fields.
    pub fn parse_line(&self, line: &str) -> Row {
        self.parse_line_at(line, 0)
    }

    fn parse_line_at(&self, line: &str, line_idx: usize) -> Row {
        let mut scanner = FieldScanner::new(line, self.delim, self.quote_aware);
        let row = scanner.by_ref().map(|f| self.finish_field(f)).collect();
        Self::note_unterminated(&scanner, line_idx);
        row
    }

    /// Split one logical line and project it onto `header`.
    ///
    /// Columns without a (non-empty) header key are dropped; a line shorter
    /// than the header leaves the missing keys absent.
    pub fn parse_record(&self, line: &str, header: &[String]) -> Record {
        self.parse_record_at(line, &HeaderLayout::new(header), 0)
    }

    fn parse_record_at(&self, line: &str, layout: &HeaderLayout<'_>, line_idx: usize) -> Record {
        let mut scanner = FieldScanner::new(line, self.delim, self.quote_aware);
        let mut values: Vec<Option<String>> = vec![None; layout.keys.len()];
        for (slot, raw) in layout.slots.iter().zip(scanner.by_ref()) {
            if let Some(slot) = *slot {
                values[slot] = Some(self.finish_field(raw));
            }
        }
        Self::note_unterminated(&scanner, line_idx);
        let mut rec = Record::with_capacity(values.len());
        for (key, value) in layout.keys.iter().zip(values) {
            if let Some(value) = value {
                rec.push_unique(key, value);
            }
        }
        rec
    }

    pub fn rows(&self, input: &str) -> Vec<Row> {
        let rows: Vec<Row> = self
            .lines(input)
            .enumerate()
            .map(|(i, line)| self.parse_line_at(&line, i))
            .collect();
        tracing::debug!(rows = rows.len(), "parsed csv rows");
        rows
    }

    pub fn records(&self, input: &str) -> Vec<Record> {
        let mut lines = self.lines(input).enumerate();
        let header: Cow<'_, [String]> = match &self.opts.header_keys {
            Some(keys) => Cow::Borrowed(keys.as_slice()),
            None => match lines.next() {
                Some((i, line)) => Cow::Owned(self.parse_line_at(&line, i)),
                None => return Vec::new(),
            },
        };
        let layout = HeaderLayout::new(&header);
        let records: Vec<Record> = lines
            .map(|(i, line)| self.parse_record_at(&line, &layout, i))
            .collect();
        tracing::debug!(
            records = records.len(),
            columns = header.len(),
            "parsed csv records"
        );
        records
    }

    pub fn table(&self, input: &str) -> Table {
        if self.opts.return_object {
            Table::Records(self.records(input))
        } else {
            Table::Rows(self.rows(input))
        }
    }
}

/// Column-to-key mapping, resolved once per header.
///
/// `keys` holds the distinct non-empty keys in first-seen order; `slots`
/// maps each column to its key, so a repeated key reuses the slot of its
/// first occurrence and a later column overwrites it.
struct HeaderLayout<'h> {
    keys: Vec<&'h str>,
    slots: Vec<Option<usize>>,
}

impl<'h> HeaderLayout<'h> {
    fn new(header: &'h [String]) -> Self {
        let mut index: HashMap<&'h str, usize> = HashMap::with_capacity(header.len());
        let mut keys = Vec::with_capacity(header.len());
        let slots = header
            .iter()
            .map(|key| {
                if key.is_empty() {
                    return None;
                }
                let slot = *index.entry(key.as_str()).or_insert_with(|| {
                    keys.push(key.as_str());
                    keys.len() - 1
                });
                Some(slot)
            })
            .collect();
        Self { keys, slots }
    }
}

fn trim_document(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn parse_to_table(input: &str, opts: &Options) -> Result<Table> {
    Ok(Parser::new(opts)?.table(input))
}

pub fn parse_to_rows(input: &str, opts: &Options) -> Result<Vec<Row>> {
    Ok(Parser::new(opts)?.rows(input))
}

pub fn parse_to_records(input: &str, opts: &Options) -> Result<Vec<Record>> {
    Ok(Parser::new(opts)?.records(input))
}
