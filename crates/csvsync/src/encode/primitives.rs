use crate::options::QUOTE;

/// Whether a text field must be wrapped in quotes when written with `delim`.
///
/// A field carrying the quote character is always quoted, so the doubled
/// quotes it is written with can be read back.
pub fn needs_quotes(s: &str, delim: char) -> bool {
    s.contains(delim) || s.contains('\n') || s.contains(QUOTE)
}

/// Append `s` to `out` wrapped in quotes, doubling every embedded quote.
pub fn escape_and_quote_into(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push(QUOTE);
    for ch in s.chars() {
        if ch == QUOTE {
            out.push(QUOTE);
        }
        out.push(ch);
    }
    out.push(QUOTE);
}

/// Append one text field to `out`, quoting it when `quote_all` is set or
/// its content requires it.
pub fn format_text_into(out: &mut String, s: &str, delim: char, quote_all: bool) {
    if quote_all || needs_quotes(s, delim) {
        escape_and_quote_into(out, s);
    } else {
        out.push_str(s);
    }
}

pub fn format_bool(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}
