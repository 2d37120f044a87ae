#![no_main]

use libfuzzer_sys::fuzz_target;
use pathflip::solver::{split_model, ModelReader};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = split_model(text);
    }

    let mut reader = ModelReader::new(data);
    while let Ok(Some(_)) = reader.next_model() {}
});
