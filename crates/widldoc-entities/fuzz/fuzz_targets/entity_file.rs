#![no_main]

use libfuzzer_sys::fuzz_target;
use widldoc_entities::EntityFile;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing and validation must reject bad data with an error, never a panic.
        if let Ok(file) = EntityFile::from_toml_str(input) {
            let _table = file.table();
        }
        if let Ok(file) = EntityFile::from_json_str(input) {
            let _table = file.table();
        }
    }
});
