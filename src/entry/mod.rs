use std::ffi::OsString;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::args::FillerArgs;
use crate::config::{apply_config, load_config};
use crate::driver::{DriverConfig, StdoutProgress, run_driver};
use crate::error::{AppError, AppResult, ValidationError};
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::system::logger::init_logging;
use crate::system::summary_output::print_summary;

/// Parses arguments, merges the config file and runs the driver to
/// completion on a current-thread runtime.
///
/// # Errors
///
/// Returns an error when arguments or configuration are invalid, when the
/// runtime cannot be built, or when the run ends with failed requests or an
/// interruption.
pub fn run() -> AppResult<()> {
    let (args, matches) = parse_args(std::env::args_os())?;

    init_logging(args.verbose, args.no_color);

    let args = merge_config(args, &matches)?;
    let config = DriverConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::validation(ValidationError::RuntimeBuildFailed { source: err }))?;

    runtime.block_on(run_async(&args, &config))
}

fn parse_args<I>(raw_args: I) -> AppResult<(FillerArgs, ArgMatches)>
where
    I: IntoIterator<Item = OsString>,
{
    let matches = FillerArgs::command().get_matches_from(raw_args);
    let args = FillerArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn merge_config(mut args: FillerArgs, matches: &ArgMatches) -> AppResult<FillerArgs> {
    if let Some(config) = load_config(args.config.as_deref())? {
        debug!("Applying config file values.");
        apply_config(&mut args, matches, &config)?;
    }
    Ok(args)
}

async fn run_async(args: &FillerArgs, config: &DriverConfig) -> AppResult<()> {
    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let mut progress = StdoutProgress;
    let result = run_driver(config, &mut progress, &shutdown_tx).await;

    // Releases the signal task once the run is over.
    drop(shutdown_tx.send(()));
    drop(signal_handle.await);

    let summary = result?;
    print_summary(&summary, args.output_format)?;
    summary.outcome()?;
    Ok(())
}
