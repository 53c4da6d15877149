#![no_main]
use libfuzzer_sys::fuzz_target;
use jsontree::{parse, serialize};

fuzz_target!(|data: &str| {
    let v = match parse(data) {
        Ok(v) => v,
        Err(_) => return,
    };

    let serialized = serialize(&v);
    let reparsed = match parse(&serialized) {
        Ok(v) => v,
        Err(_) => {
            panic!("re-parse of serialize() output failed for {data:?} -> {serialized:?}");
        }
    };

    assert_eq!(
        v, reparsed,
        "parse/serialize round trip changed value for {data:?}",
    );
});
