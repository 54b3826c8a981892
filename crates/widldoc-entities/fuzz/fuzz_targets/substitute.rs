#![no_main]

use libfuzzer_sys::fuzz_target;
use widldoc_entities::{BUILTIN, lookup_entity, substitute_entities};
use widldoc_types::config::UnresolvedPolicy;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Must not panic on any input, and an input without `&` comes back as-is.
        let out = substitute_entities(input, &BUILTIN, UnresolvedPolicy::PassThrough)
            .expect("pass-through never fails");
        if !input.contains('&') {
            assert_eq!(out.text, input);
        }

        let _ = lookup_entity(input);
    }
});
