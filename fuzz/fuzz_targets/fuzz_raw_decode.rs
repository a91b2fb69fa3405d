#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // The raw functions accept any string and must stay total.
        let _ = vindecode::validate_check_digit(s);
        let _ = vindecode::estimate_model_year(s);
        if let Some(lead) = s.chars().next() {
            let _ = vindecode::infer_region(lead);
        }
    }
});
