#![no_main]
use libfuzzer_sys::fuzz_target;
use xpathlite::parse_document;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(node) = parse_document(s) {
            let _ = parse_document(node.to_string().as_str());
        }
    }
});
