#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let (base, path) = input.split_once('\n').unwrap_or((input, "/external/sensors_data"));
    if let Ok(endpoint) = sensor_filler::fuzzing::resolve_endpoint_input(base, path) {
        debug_assert!(matches!(endpoint.scheme(), "http" | "https"));
        debug_assert!(endpoint.host_str().is_some());
    }
});
