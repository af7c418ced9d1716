use std::time::Duration;

use serde::Deserialize;

use crate::args::{FailurePolicy, OutputFormat, parse_duration};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(alias = "base_url")]
    pub url: Option<String>,
    pub path: Option<String>,
    #[serde(alias = "requests")]
    pub total: Option<u64>,
    pub guids: Option<Vec<String>>,
    #[serde(alias = "status")]
    pub expected_status: Option<u16>,
    #[serde(alias = "concurrency")]
    pub max_in_flight: Option<usize>,
    pub timeout: Option<DurationValue>,
    pub failure_policy: Option<FailurePolicy>,
    pub seed: Option<u64>,
    pub no_progress: Option<bool>,
    pub output_format: Option<OutputFormat>,
}

/// Either whole seconds or a `ms`/`s`/`m`/`h` string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

impl DurationValue {
    pub(crate) fn to_duration(&self) -> Result<Duration, ValidationError> {
        match self {
            DurationValue::Seconds(secs) => {
                if *secs == 0 {
                    Err(ValidationError::DurationZero)
                } else {
                    Ok(Duration::from_secs(*secs))
                }
            }
            DurationValue::Text(text) => parse_duration(text),
        }
    }
}
