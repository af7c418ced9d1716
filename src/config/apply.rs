use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{FillerArgs, PositiveU64, PositiveUsize};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments.
///
/// Values set on the command line or through the environment win over the
/// config file; the config file wins over built-in defaults.
///
/// # Errors
///
/// Returns an error when a config value is out of range.
pub fn apply_config(
    args: &mut FillerArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_explicit(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = url;
    }

    if !is_explicit(matches, "path")
        && let Some(path) = config.path.clone()
    {
        args.path = path;
    }

    if !is_explicit(matches, "total")
        && let Some(total) = config.total
    {
        args.total = ensure_positive_u64(total, "total")?;
    }

    if !is_explicit(matches, "guids")
        && let Some(guids) = config.guids.clone()
    {
        args.guids = guids;
    }

    if !is_explicit(matches, "expected_status")
        && let Some(status) = config.expected_status
    {
        args.expected_status = status;
    }

    if !is_explicit(matches, "max_in_flight")
        && let Some(limit) = config.max_in_flight
    {
        args.max_in_flight = ensure_positive_usize(limit, "max_in_flight")?;
    }

    if !is_explicit(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        let timeout = timeout
            .to_duration()
            .map_err(|err| AppError::config(ConfigError::InvalidTimeout { source: err }))?;
        args.timeout = Some(timeout);
    }

    if !is_explicit(matches, "failure_policy")
        && let Some(policy) = config.failure_policy
    {
        args.failure_policy = policy;
    }

    if !is_explicit(matches, "seed")
        && let Some(seed) = config.seed
    {
        args.seed = Some(seed);
    }

    if !is_explicit(matches, "no_progress")
        && let Some(no_progress) = config.no_progress
    {
        args.no_progress = no_progress;
    }

    if !is_explicit(matches, "output_format")
        && let Some(format) = config.output_format
    {
        args.output_format = format;
    }

    Ok(())
}

fn is_explicit(matches: &ArgMatches, name: &str) -> bool {
    matches!(
        matches.value_source(name),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

fn ensure_positive_u64(value: u64, field: &str) -> AppResult<PositiveU64> {
    PositiveU64::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}

fn ensure_positive_usize(value: usize, field: &str) -> AppResult<PositiveUsize> {
    PositiveUsize::try_from(value).map_err(|err| {
        AppError::config(ConfigError::FieldMustBePositive {
            field: field.to_owned(),
            source: err,
        })
    })
}
