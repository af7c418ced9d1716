//! Request driver: generates readings and submits them concurrently.
mod config;
mod progress;
mod summary;


use std::sync::Arc;

use tokio::sync::{Semaphore, broadcast};
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::args::FailurePolicy;
use crate::error::{AppError, AppResult, SendError};
use crate::http::{build_client, send_reading};
use crate::reading::ReadingGenerator;
use crate::shutdown::ShutdownSender;

pub use config::{DriverConfig, resolve_endpoint};
pub use progress::{ProgressSink, ProgressTracker, StdoutProgress};
pub use summary::RunSummary;

/// Sends `config.total` readings and waits for every send task.
///
/// All tasks are scheduled up front on one shared client; `max_in_flight`
/// limits how many are on the wire at once. Under
/// [`FailurePolicy::FailFast`] the first failure aborts every outstanding
/// task. A broadcast on `shutdown_tx` does the same and marks the summary as
/// interrupted. `progress.finish()` is always called once all tasks are done.
///
/// # Errors
///
/// Returns an error when the HTTP client or reading generator cannot be
/// built. Failed requests are reported through the summary, not as errors.
pub async fn run_driver<P>(
    config: &DriverConfig,
    progress: &mut P,
    shutdown_tx: &ShutdownSender,
) -> AppResult<RunSummary>
where
    P: ProgressSink + ?Sized,
{
    let client = build_client(config.timeout)?;
    let mut generator =
        ReadingGenerator::new(config.guids.clone(), config.seed).map_err(AppError::validation)?;
    let endpoint = Arc::new(config.endpoint.clone());
    let limiter = Arc::new(Semaphore::new(config.max_in_flight.get()));
    let expected_status = config.expected_status;
    let total = config.total.get();

    info!(
        "Sending {} readings to {} (policy: {}, max in flight: {})",
        total,
        config.endpoint,
        config.failure_policy.as_str(),
        config.max_in_flight.get()
    );

    let mut shutdown_rx = shutdown_tx.subscribe();
    let started = Instant::now();
    let mut tasks: JoinSet<Result<u16, SendError>> = JoinSet::new();

    for _ in 0..total {
        let reading = generator.next_reading();
        let client = client.clone();
        let endpoint = Arc::clone(&endpoint);
        let limiter = Arc::clone(&limiter);
        tasks.spawn(async move {
            // The semaphore is never closed, so a permit is always granted.
            let _permit = limiter.acquire_owned().await.ok();
            send_reading(&client, &endpoint, &reading, expected_status).await
        });
    }
    drop(client);

    let mut summary = RunSummary::new(total, config.failure_policy);
    let mut tracker = ProgressTracker::new(config.total);
    let mut listen_for_shutdown = true;
    let mut interrupted = false;
    let mut aborted = false;

    loop {
        tokio::select! {
            biased;
            result = shutdown_rx.recv(), if listen_for_shutdown => {
                listen_for_shutdown = false;
                if matches!(result, Err(broadcast::error::RecvError::Closed)) {
                    continue;
                }
                warn!("Shutdown requested, aborting {} outstanding requests.", tasks.len());
                interrupted = true;
                aborted = true;
                tasks.abort_all();
            }
            joined = tasks.join_next() => {
                let Some(joined) = joined else {
                    break;
                };
                match joined {
                    Ok(Ok(status)) => {
                        debug!("Reading accepted with status {}", status);
                        summary.record_success();
                    }
                    Ok(Err(err)) => {
                        record_failure(&mut summary, &err);
                        if config.failure_policy == FailurePolicy::FailFast && !aborted {
                            warn!("Fail-fast: aborting {} outstanding requests.", tasks.len());
                            aborted = true;
                            tasks.abort_all();
                        }
                    }
                    Err(join_err) if join_err.is_cancelled() => {
                        summary.record_not_sent();
                        continue;
                    }
                    Err(join_err) => {
                        let err = SendError::TaskFailed {
                            message: join_err.to_string(),
                        };
                        record_failure(&mut summary, &err);
                    }
                }
                if let Some(percent) = tracker.record()
                    && config.progress
                {
                    progress.marker(percent);
                }
            }
        }
    }

    progress.finish();
    summary.finish(started.elapsed(), interrupted);

    info!(
        "Finished: {} succeeded, {} failed, {} not sent in {}ms",
        summary.succeeded, summary.failed, summary.not_sent, summary.elapsed_ms
    );
    Ok(summary)
}

fn record_failure(summary: &mut RunSummary, err: &SendError) {
    if summary.record_failure(err.to_string()) {
        warn!("First request failure: {}", err);
    } else {
        debug!("Request failed: {}", err);
    }
}
