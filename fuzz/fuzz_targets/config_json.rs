#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(config) = sensor_filler::fuzzing::apply_config_from_json(data) {
        debug_assert!(config.total.get() >= 1);
        debug_assert!(!config.guids.is_empty());
        debug_assert!(config.max_in_flight.get() >= 1);
        if let Some(timeout) = config.timeout {
            debug_assert!(timeout.as_millis() > 0);
        }
    }
});
