#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let seq = isostamp::parse_sequential(data);
    let sm = isostamp::parse_state_machine(data);
    assert_eq!(seq, sm, "variants disagree for {:?}", String::from_utf8_lossy(data));
    if let Some(parsed) = seq {
        assert!(parsed.consumed <= data.len());
        assert_eq!(isostamp::parse_sequential(&data[..parsed.consumed]), Some(parsed));
    }
});
