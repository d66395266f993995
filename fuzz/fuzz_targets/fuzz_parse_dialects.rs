#![no_main]
use arbitrary::Arbitrary;
use csvsync::{Delimiter, Options, parse};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    delimiter: char,
    skip_header: bool,
    return_object: bool,
    trim: bool,
    remove_field_quote: Option<char>,
    unquoted_fields: bool,
    text: String,
}

fuzz_target!(|input: Input| {
    let opts = Options {
        delimiter: Delimiter::from_char(input.delimiter),
        skip_header: input.skip_header,
        return_object: input.return_object,
        trim: input.trim,
        remove_field_quote: input.remove_field_quote,
        unquoted_fields: input.unquoted_fields,
        ..Options::default()
    };
    // Invalid dialects must be rejected, never panic.
    let _ = parse(&input.text, &opts);
});
