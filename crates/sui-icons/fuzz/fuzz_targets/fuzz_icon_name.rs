#![no_main]

use libfuzzer_sys::fuzz_target;
use sui_icons::{SuiIcon, SuiIconClassName};

fuzz_target!(|data: &[u8]| {
    // Lookups must never panic, and any hit must map back to the input
    if let Ok(s) = std::str::from_utf8(data) {
        if let Some(icon) = SuiIcon::from_name(s) {
            assert_eq!(icon.name(), s);
        }
        if let Ok(class) = SuiIconClassName::new(s) {
            assert_eq!(class.as_str(), s);
        }
    }
});
