use clap::Parser;
use std::time::Duration;

use super::defaults::{DEFAULT_ENDPOINTS, DEFAULT_USER_AGENT};
use super::parsers::{parse_duration_arg, parse_endpoint, parse_header};
use super::types::TestMode;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Smoke tester for job-tracking capture APIs - posts sample or hand-entered job applications to each candidate endpoint and reports what worked."
)]
pub struct ProbeArgs {
    /// User ID (the extension code). Prompted for when omitted.
    #[arg(env = "CAPTURE_PROBE_USER_ID")]
    pub user_id: Option<String>,

    /// Capture endpoint to try, in order (repeatable; replaces the built-in list)
    #[arg(long = "endpoint", short = 'e', value_parser = parse_endpoint)]
    pub endpoints: Vec<String>,

    /// Per-attempt timeout (supports ms/s/m/h, bare numbers are seconds)
    #[arg(long, short = 't', default_value = "30s", value_parser = parse_duration_arg)]
    pub timeout: Duration,

    /// Run this mode without showing the menu
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<TestMode>,

    /// Extra HTTP headers in 'Key: Value' format (repeatable)
    #[arg(long = "header", short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// User-Agent sent with every attempt
    #[arg(long = "user-agent", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Job URL used for custom data; LinkedIn job URLs also supply the external id
    #[arg(long = "job-url")]
    pub job_url: Option<String>,

    /// Path to config file (TOML/JSON). Defaults to ./capture-probe.toml or ./capture-probe.json if present.
    #[arg(long, short = 'c')]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by CAPTURE_PROBE_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl ProbeArgs {
    /// Endpoints to try, falling back to the built-in list when none were set.
    #[must_use]
    pub fn endpoint_list(&self) -> Vec<String> {
        if self.endpoints.is_empty() {
            return DEFAULT_ENDPOINTS
                .iter()
                .map(|endpoint| (*endpoint).to_owned())
                .collect();
        }
        self.endpoints.clone()
    }
}
