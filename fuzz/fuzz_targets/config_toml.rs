#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(config) = sensor_filler::fuzzing::apply_config_from_toml(input) {
            debug_assert!(config.total.get() >= 1);
            debug_assert!(!config.guids.is_empty());
            debug_assert!(matches!(config.endpoint.scheme(), "http" | "https"));
        }
    }
});
