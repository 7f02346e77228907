#![no_main]

use libfuzzer_sys::fuzz_target;
use isostamp::{MAX_FORMAT_LEN, Variant};

fuzz_target!(|data: &[u8]| {
    let Some(parsed) = Variant::Sequential.parse(data) else {
        return;
    };
    let mut buf = [0u8; MAX_FORMAT_LEN];
    let text = parsed.value.format(&mut buf);
    let again = Variant::Sequential.parse(text.as_bytes()).unwrap();
    assert_eq!(again.consumed, text.len());
    assert_eq!(parsed.value.date(), again.value.date());
    assert_eq!(parsed.value.time(), again.value.time());
    assert_eq!(parsed.value.offset(), again.value.offset());
    assert_eq!(parsed.kind, again.kind);
});
