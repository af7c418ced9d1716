use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{failed} of {total} requests failed.")]
    RequestsFailed { failed: u64, total: u64 },
    #[error("Run interrupted after {completed} of {total} requests.")]
    Interrupted { completed: u64, total: u64 },
}
