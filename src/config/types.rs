use std::time::Duration;

use serde::Deserialize;

use crate::args::{TestMode, parse_duration_arg};
use crate::error::ValidationError;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub user_id: Option<String>,
    pub endpoints: Option<Vec<String>>,
    pub timeout: Option<DurationValue>,
    pub user_agent: Option<String>,
    pub headers: Option<Vec<String>>,
    pub mode: Option<TestMode>,
    pub job_url: Option<String>,
}

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
            DurationValue::Text(text) => parse_duration_arg(text),
        }
    }
}
