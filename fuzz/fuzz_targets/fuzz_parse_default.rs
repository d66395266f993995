#![no_main]
use csvsync::{Options, parse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let opts = Options::default();
        let _ = parse(s, &opts);
    }
});
