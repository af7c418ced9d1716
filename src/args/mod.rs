//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::FillerArgs;
pub use defaults::{
    DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH, DEFAULT_EXPECTED_STATUS, DEFAULT_GUIDS,
    DEFAULT_MAX_IN_FLIGHT, DEFAULT_TOTAL,
};
pub use types::{FailurePolicy, OutputFormat, PositiveU64, PositiveUsize};

pub(crate) use defaults::{DEFAULT_CONFIG_FILES, DEFAULT_USER_AGENT};
pub(crate) use parsers::parse_duration;
