#![no_main]
use libfuzzer_sys::fuzz_target;
use xpathlite::{compile_path, parse_document};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (path, document) = s.split_once('\n').unwrap_or((s, "<a></a>"));
        if let (Ok(path), Ok(root)) = (compile_path(path), parse_document(document)) {
            let _ = path.evaluate_numbers(&root);
        }
    }
});
