use clap::Parser;
use std::time::Duration;

use super::defaults::{
    DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PATH, DEFAULT_EXPECTED_STATUS, DEFAULT_GUIDS,
};
use super::parsers::{parse_duration, parse_positive_u64, parse_positive_usize};
use super::types::{FailurePolicy, OutputFormat, PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Seeds a sensor-data service with synthetic readings by firing concurrent JSON POST requests."
)]
pub struct FillerArgs {
    /// Base URL of the target service
    #[arg(long, short, env = "SENSOR_FILLER_URL", default_value = DEFAULT_BASE_URL)]
    pub url: String,

    /// Endpoint path appended to the base URL
    #[arg(long, short, default_value = DEFAULT_ENDPOINT_PATH)]
    pub path: String,

    /// Number of readings to send
    #[arg(long, short = 'n', default_value = "100000", value_parser = parse_positive_u64)]
    pub total: PositiveU64,

    /// Sensor guid to pick from (repeatable or comma-separated)
    #[arg(long = "guid", short = 'g', value_delimiter = ',', default_values = DEFAULT_GUIDS)]
    pub guids: Vec<String>,

    /// Response status counted as success
    #[arg(long = "expected-status", default_value_t = DEFAULT_EXPECTED_STATUS)]
    pub expected_status: u16,

    /// Maximum number of requests on the wire at once
    #[arg(
        long = "max-in-flight",
        short = 'c',
        default_value = "100",
        value_parser = parse_positive_usize
    )]
    pub max_in_flight: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,

    /// Behavior after a failed request
    #[arg(long = "failure-policy", value_enum, default_value = "collect-all")]
    pub failure_policy: FailurePolicy,

    /// Seed for reproducible payloads
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print progress markers
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Summary format printed after the run
    #[arg(long = "output-format", value_enum, default_value = "text")]
    pub output_format: OutputFormat,

    /// Path to a TOML or JSON config file
    #[arg(long)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,
}
