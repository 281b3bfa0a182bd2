use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use tracing::debug;

use crate::args::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use crate::error::{AppError, AppResult, HttpError};
use crate::payload::JobPayload;

use super::{AttemptOutcome, CapturePort};

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone)]
pub struct CaptureClientConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub headers: Vec<(String, String)>,
}

impl Default for CaptureClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            headers: Vec::new(),
        }
    }
}

/// [`CapturePort`] backed by a reqwest client with fixed headers and timeout.
#[derive(Debug, Clone)]
pub struct ReqwestCaptureAdapter {
    client: Client,
    timeout: Duration,
}

impl ReqwestCaptureAdapter {
    /// Builds the HTTP client used for every attempt.
    ///
    /// # Errors
    ///
    /// Returns an error when a header is invalid or the client cannot be built.
    pub fn new(config: &CaptureClientConfig) -> AppResult<Self> {
        let headers = build_headers(&config.headers)?;
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }
}

#[async_trait]
impl CapturePort for ReqwestCaptureAdapter {
    async fn submit(&self, endpoint: &str, payload: &JobPayload) -> AttemptOutcome {
        let started = Instant::now();
        let response = match self.client.post(endpoint).json(payload).send().await {
            Ok(response) => response,
            Err(err) => {
                debug!("POST {} failed after {:?}: {}", endpoint, started.elapsed(), err);
                return AttemptOutcome::from_transport_error(&err, self.timeout);
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!("Reading body from {} failed: {}", endpoint, err);
                return AttemptOutcome::from_transport_error(&err, self.timeout);
            }
        };
        debug!(
            "POST {} -> {} in {}ms ({} bytes)",
            endpoint,
            status,
            started.elapsed().as_millis(),
            body.len()
        );

        let outcome = AttemptOutcome::from_response(status, &body);
        if let Some(job_id) = outcome
            .capture_reply()
            .and_then(|reply| reply.job)
            .and_then(|job| job.id)
        {
            debug!("Endpoint {} captured job {}", endpoint, job_id);
        }
        if let Some(api_error) = outcome.api_error() {
            debug!("Endpoint {} rejected the job: {}", endpoint, api_error);
        }
        outcome
    }
}

fn build_headers(extra: &[(String, String)]) -> AppResult<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    for (key, value) in extra {
        let name = HeaderName::from_bytes(key.as_bytes()).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderName {
                header: key.clone(),
                source: err,
            })
        })?;
        let header_value = HeaderValue::from_str(value).map_err(|err| {
            AppError::http(HttpError::InvalidHeaderValue {
                header: key.clone(),
                source: err,
            })
        })?;
        headers.insert(name, header_value);
    }
    Ok(headers)
}
