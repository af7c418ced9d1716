pub(crate) const DEFAULT_USER_AGENT: &str = concat!("sensor-filler/", env!("CARGO_PKG_VERSION"));

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["sensor-filler.toml", "sensor-filler.json"];

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ENDPOINT_PATH: &str = "/external/sensors_data";
pub const DEFAULT_TOTAL: u64 = 100_000;
/// Matches the connection limit of a default aiohttp connector.
pub const DEFAULT_MAX_IN_FLIGHT: usize = 100;
pub const DEFAULT_EXPECTED_STATUS: u16 = 200;
pub const DEFAULT_GUIDS: [&str; 4] = ["string", "killer", "a", "b"];
