#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary JSON for the restricted types should only return Ok or Err
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = serde_json::from_str::<sui_icons::SuiIconClassName>(s);
        let _ = serde_json::from_str::<Vec<sui_icons::SuiIcon>>(s);
    }
});
