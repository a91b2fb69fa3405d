#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic. Parsed VINs are always 17 ASCII characters.
        if let Ok(vin) = vindecode::Vin::parse(s) {
            let d = vindecode::decode(&vin);
            assert_eq!(d.vin.as_str().len(), vindecode::VIN_LENGTH);
        }
    }
});
