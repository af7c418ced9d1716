#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        let from_arg = sensor_filler::fuzzing::parse_duration_input(input);
        let from_config = sensor_filler::fuzzing::parse_duration_value_input(input);
        debug_assert_eq!(from_arg.is_ok(), from_config.is_ok());
        if let Ok(duration) = from_config {
            debug_assert!(duration.as_millis() > 0);
        }
    }
});
