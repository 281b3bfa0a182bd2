use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::payload::JobPayload;

use super::{AttemptOutcome, CapturePort};

/// Port returning scripted outcomes per endpoint; unknown endpoints are
/// unreachable. Every call is recorded.
pub(crate) struct FakeCapturePort {
    outcomes: BTreeMap<String, AttemptOutcome>,
    seen: Mutex<Vec<(String, JobPayload)>>,
}

impl FakeCapturePort {
    pub(crate) fn new(outcomes: &[(&str, AttemptOutcome)]) -> Self {
        Self {
            outcomes: outcomes
                .iter()
                .map(|(endpoint, outcome)| ((*endpoint).to_owned(), outcome.clone()))
                .collect(),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn seen_endpoints(&self) -> Vec<String> {
        self.seen
            .lock()
            .map(|seen| seen.iter().map(|(endpoint, _)| endpoint.clone()).collect())
            .unwrap_or_default()
    }

    pub(crate) fn seen_payloads(&self) -> Vec<JobPayload> {
        self.seen
            .lock()
            .map(|seen| seen.iter().map(|(_, payload)| payload.clone()).collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CapturePort for FakeCapturePort {
    async fn submit(&self, endpoint: &str, payload: &JobPayload) -> AttemptOutcome {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((endpoint.to_owned(), payload.clone()));
        }
        self.outcomes
            .get(endpoint)
            .cloned()
            .unwrap_or(AttemptOutcome::ConnectionFailed)
    }
}

pub(crate) fn accepted(body: &str) -> AttemptOutcome {
    AttemptOutcome::from_response(200, body)
}
