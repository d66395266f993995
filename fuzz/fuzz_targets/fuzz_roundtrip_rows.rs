#![no_main]
use csvsync::{Options, parse_rows, stringify};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|rows: Vec<Vec<String>>| {
    // Stay inside the round-trip contract: no `\r`, no empty rows, and no
    // whitespace or BOM at either end of the document (trimmed on parse).
    if rows.is_empty() || rows.iter().any(|r| r.is_empty() || (r.len() == 1 && r[0].trim().is_empty())) {
        return;
    }
    if rows.iter().flatten().any(|f| f.contains('\r') || f.contains('\u{feff}')) {
        return;
    }
    let opts = Options::default();
    let text = match stringify(&rows, &opts) {
        Ok(t) => t,
        Err(e) => panic!("stringify failed: {}", e),
    };
    if text.trim() != text.trim_end_matches('\n') {
        return;
    }
    match parse_rows(&text, &opts) {
        Ok(back) => {
            if back != rows {
                panic!("roundtrip mismatch!\nRows: {:?}\nText: {:?}\nBack: {:?}", rows, text, back);
            }
        }
        Err(e) => panic!("failed to parse stringified rows: {}\nText: {:?}", e, text),
    }
});
