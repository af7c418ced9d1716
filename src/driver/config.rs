use std::time::Duration;

use url::Url;

use crate::args::{
    DEFAULT_ENDPOINT_PATH, DEFAULT_EXPECTED_STATUS, DEFAULT_GUIDS, DEFAULT_MAX_IN_FLIGHT,
    FailurePolicy, FillerArgs, PositiveU64, PositiveUsize,
};
use crate::error::{AppError, AppResult, ValidationError};
use crate::reading::validate_guids;

/// Validated settings for one run.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    pub endpoint: Url,
    pub total: PositiveU64,
    pub guids: Vec<String>,
    pub expected_status: u16,
    pub max_in_flight: PositiveUsize,
    pub timeout: Option<Duration>,
    pub failure_policy: FailurePolicy,
    pub seed: Option<u64>,
    pub progress: bool,
}

impl DriverConfig {
    /// Builds a config targeting `base_url` with every other setting at its
    /// default.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is invalid.
    pub fn new(base_url: &str, total: PositiveU64) -> AppResult<Self> {
        Ok(Self {
            endpoint: resolve_endpoint(base_url, DEFAULT_ENDPOINT_PATH)?,
            total,
            guids: DEFAULT_GUIDS.iter().map(|guid| (*guid).to_owned()).collect(),
            expected_status: DEFAULT_EXPECTED_STATUS,
            max_in_flight: PositiveUsize::try_from(DEFAULT_MAX_IN_FLIGHT)
                .map_err(AppError::validation)?,
            timeout: None,
            failure_policy: FailurePolicy::default(),
            seed: None,
            progress: true,
        })
    }

    /// Validates merged CLI/config arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the target URL or guid set is invalid.
    pub fn from_args(args: &FillerArgs) -> AppResult<Self> {
        validate_guids(&args.guids).map_err(AppError::validation)?;
        Ok(Self {
            endpoint: resolve_endpoint(&args.url, &args.path)?,
            total: args.total,
            guids: args.guids.clone(),
            expected_status: args.expected_status,
            max_in_flight: args.max_in_flight,
            timeout: args.timeout,
            failure_policy: args.failure_policy,
            seed: args.seed,
            progress: !args.no_progress,
        })
    }
}

/// Appends `path` to the base URL's own path, so a base of
/// `http://host/api` and a path of `/external/x` yields `http://host/api/external/x`.
///
/// # Errors
///
/// Returns an error when the base URL does not parse, is not http(s), has no
/// host, or when the path is empty.
pub fn resolve_endpoint(base_url: &str, path: &str) -> AppResult<Url> {
    let base = Url::parse(base_url.trim()).map_err(|err| {
        AppError::validation(ValidationError::InvalidUrl {
            url: base_url.to_owned(),
            source: err,
        })
    })?;
    match base.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::validation(ValidationError::UnsupportedScheme {
                scheme: other.to_owned(),
            }));
        }
    }
    if base.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }

    let suffix = path.trim().trim_start_matches('/');
    if suffix.is_empty() {
        return Err(AppError::validation(ValidationError::EndpointPathEmpty));
    }
    let prefix = base.path().trim_end_matches('/');

    let mut endpoint = base.clone();
    endpoint.set_path(&format!("{}/{}", prefix, suffix));
    endpoint.set_query(None);
    endpoint.set_fragment(None);
    Ok(endpoint)
}
