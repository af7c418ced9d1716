use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::args::{FillerArgs, PositiveU64, PositiveUsize, parse_duration};
use crate::config::apply_config;
use crate::config::types::{ConfigFile, DurationValue};
use crate::driver::{DriverConfig, resolve_endpoint};
use crate::error::{AppError, AppResult, ConfigError};

thread_local! {
    static BASE_MATCHES: ArgMatches = FillerArgs::command().get_matches_from(["sensor-filler"]);
}

/// Parses a duration argument (e.g. `10s`, `500ms`).
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_input(input: &str) -> AppResult<Duration> {
    parse_duration(input).map_err(AppError::from)
}

/// Parses a duration value the way the config file does.
///
/// # Errors
///
/// Returns an error when the duration is invalid.
pub fn parse_duration_value_input(input: &str) -> AppResult<Duration> {
    DurationValue::Text(input.to_owned())
        .to_duration()
        .map_err(AppError::from)
}

/// Parses TOML config, applies it to defaults and validates the result.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_toml(input: &str) -> AppResult<DriverConfig> {
    let config: ConfigFile = toml::from_str(input).map_err(|err| {
        AppError::config(ConfigError::ParseToml {
            path: "fuzz.toml".into(),
            source: err,
        })
    })?;
    apply_config_to_defaults(&config)
}

/// Parses JSON config, applies it to defaults and validates the result.
///
/// # Errors
///
/// Returns an error when parsing or validation fails.
pub fn apply_config_from_json(input: &[u8]) -> AppResult<DriverConfig> {
    let config: ConfigFile = serde_json::from_slice(input)?;
    apply_config_to_defaults(&config)
}

/// Parses a positive u64 string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_u64_input(input: &str) -> AppResult<u64> {
    let value: PositiveU64 = input.parse()?;
    Ok(value.get())
}

/// Parses a positive usize string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_usize_input(input: &str) -> AppResult<usize> {
    let value: PositiveUsize = input.parse()?;
    Ok(value.get())
}

/// Joins a base URL and endpoint path.
///
/// # Errors
///
/// Returns an error when the target is not a usable http(s) endpoint.
pub fn resolve_endpoint_input(base_url: &str, path: &str) -> AppResult<url::Url> {
    resolve_endpoint(base_url, path)
}

/// Loads a config file from disk to exercise extension handling.
///
/// # Errors
///
/// Returns an error when the config file cannot be read or parsed.
pub fn load_config_file_input(path: &std::path::Path) -> AppResult<()> {
    crate::config::load_config_file(path).map(|_| ())
}

fn apply_config_to_defaults(config: &ConfigFile) -> AppResult<DriverConfig> {
    BASE_MATCHES.with(|matches| {
        let mut args = FillerArgs::from_arg_matches(matches)?;
        apply_config(&mut args, matches, config)?;
        DriverConfig::from_args(&args)
    })
}
