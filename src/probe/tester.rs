use std::io::Write;

use chrono::Local;
use tracing::debug;

use crate::error::AppResult;
use crate::http::{AttemptResult, CapturePort};
use crate::payload::{JobPayload, sample_job};

use super::report::{write_custom_header, write_sample_header, write_sample_summary};

/// Posts job payloads to an ordered list of capture endpoints.
///
/// Attempts are strictly sequential; each one finishes (or times out)
/// before the next endpoint is tried.
pub struct Tester<P> {
    port: P,
    endpoints: Vec<String>,
}

impl<P> Tester<P>
where
    P: CapturePort,
{
    pub const fn new(port: P, endpoints: Vec<String>) -> Self {
        Self { port, endpoints }
    }

    #[must_use]
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Sends `payload` to a single endpoint.
    ///
    /// # Errors
    ///
    /// Only console write failures are errors; the attempt itself always
    /// yields a result.
    pub async fn test_endpoint<W>(
        &self,
        out: &mut W,
        endpoint: &str,
        payload: &JobPayload,
    ) -> AppResult<AttemptResult>
    where
        W: Write,
    {
        writeln!(out, "🔄 Testing endpoint: {}", endpoint)?;
        out.flush()?;
        let outcome = self.port.submit(endpoint, payload).await;
        debug!("Attempt against {} finished: {:?}", endpoint, outcome.status());
        Ok(AttemptResult::from(&outcome))
    }

    /// Posts the sample job to every endpoint, in order, without stopping
    /// early, then prints how many worked.
    ///
    /// Returns `true` when at least one endpoint accepted the job.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to `out` fails.
    pub async fn test_all_endpoints<W>(&self, out: &mut W, user_id: &str) -> AppResult<bool>
    where
        W: Write,
    {
        let payload = sample_job(user_id, &Local::now());
        write_sample_header(out, user_id, &payload)?;

        let total = self.endpoints.len();
        let mut succeeded = 0usize;
        for (index, endpoint) in self.endpoints.iter().enumerate() {
            writeln!(out)?;
            writeln!(out, "🔍 Test {}/{}:", index.saturating_add(1), total)?;
            let result = self.test_endpoint(out, endpoint, &payload).await?;
            writeln!(out, "{}", result.message)?;
            if result.success {
                succeeded = succeeded.saturating_add(1);
            }
        }

        write_sample_summary(out, succeeded, total)?;
        Ok(succeeded > 0)
    }

    /// Posts a hand-built job, stopping at the first endpoint that accepts it.
    ///
    /// # Errors
    ///
    /// Returns an error when writing to `out` or encoding the payload fails.
    pub async fn test_custom_data<W>(
        &self,
        out: &mut W,
        user_id: &str,
        payload: JobPayload,
    ) -> AppResult<()>
    where
        W: Write,
    {
        let payload = payload.with_user_id(user_id);
        write_custom_header(out, &payload.to_pretty_json()?)?;

        for endpoint in &self.endpoints {
            let result = self.test_endpoint(out, endpoint, &payload).await?;
            writeln!(out)?;
            writeln!(out, "{}", result.message)?;
            if result.success {
                break;
            }
        }
        Ok(())
    }
}
