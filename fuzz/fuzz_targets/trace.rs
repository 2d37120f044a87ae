#![no_main]

use libfuzzer_sys::fuzz_target;
use pathflip::trace::{DecodeConfig, Trace};

fuzz_target!(|data: &[u8]| {
    if let Ok(trace) = Trace::from_mem(data.to_vec()) {
        for config in [DecodeConfig::lenient(), DecodeConfig::strict()] {
            if let Ok(entries) = trace.entries(config) {
                for entry in entries {
                    let Ok(entry) = entry else { break };
                    let _ = entry.is_candidate();
                }
            }
        }
    }
});
