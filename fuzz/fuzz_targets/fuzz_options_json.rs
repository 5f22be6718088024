#![no_main]

use libfuzzer_sys::fuzz_target;
use typeahead_widgets::{Configuration, Options};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Malformed documents must surface as errors, never panics.
    if let Ok(options) = Options::from_json(text) {
        let _ = Configuration::from_options(options);
    }
});
