#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Parsing arbitrary text must never panic, regardless of whether it is
    // valid JSON.
    let _ = jsontree::parse(data);
});
