use async_trait::async_trait;

use crate::payload::JobPayload;

use super::AttemptOutcome;

/// Sends one job payload to one endpoint.
///
/// Implementations never fail: every transport or protocol problem is
/// reported through the returned [`AttemptOutcome`].
#[async_trait]
pub trait CapturePort: Send + Sync {
    async fn submit(&self, endpoint: &str, payload: &JobPayload) -> AttemptOutcome;
}
