use core::str::FromStr;

use crate::error::{Error, Result};

/// The quote character used for per-field quoting.
pub const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
    /// Any other single character.
    Char(char),
}

impl Delimiter {
    pub fn from_char(c: char) -> Self {
        match c {
            ',' => Delimiter::Comma,
            ';' => Delimiter::Semicolon,
            '\t' => Delimiter::Tab,
            '|' => Delimiter::Pipe,
            other => Delimiter::Char(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Char(c) => c,
        }
    }
}

impl From<char> for Delimiter {
    fn from(c: char) -> Self {
        Delimiter::from_char(c)
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(Error::config("delimiter must not be empty")),
            (Some(c), None) => Ok(Delimiter::from_char(c)),
            (Some(_), Some(_)) => Err(Error::config(format!(
                "delimiter must be a single character, got {:?}",
                s
            ))),
        }
    }
}

impl TryFrom<&str> for Delimiter {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl TryFrom<String> for Delimiter {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Dialect configuration shared by parse and stringify.
///
/// Stringify only looks at `delimiter` and `quote_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Options {
    pub delimiter: Delimiter,
    /// Quote every text field on output.
    pub quote_all: bool,
    /// Drop the first logical line before producing output.
    pub skip_header: bool,
    /// Produce records (header key -> field) instead of positional rows.
    pub return_object: bool,
    /// Explicit header keys for record mode; otherwise the first line is used.
    pub header_keys: Option<Vec<String>>,
    /// Strip leading/trailing whitespace from each field after unquoting.
    pub trim: bool,
    /// Lines fully wrapped in this character are unwrapped and
    /// `<q><delim><q>` becomes a bare delimiter.
    pub remove_field_quote: Option<char>,
    /// Quotes are ordinary text; fields never span lines.
    pub unquoted_fields: bool,
}

impl Options {
    pub fn with_delimiter(delimiter: impl Into<Delimiter>) -> Self {
        Self {
            delimiter: delimiter.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let d = self.delimiter.as_char();
        if d == QUOTE {
            return Err(Error::config("delimiter must differ from the quote character"));
        }
        if d == '\n' || d == '\r' {
            return Err(Error::config("delimiter must not be a line terminator"));
        }
        if let Some(q) = self.remove_field_quote {
            if q == '\n' || q == '\r' {
                return Err(Error::config(
                    "remove-field quote must not be a line terminator",
                ));
            }
            if q == d {
                return Err(Error::config(format!(
                    "remove-field quote {:?} must differ from the delimiter",
                    q
                )));
            }
        }
        Ok(())
    }
}
