use std::time::Duration;

/// Capture endpoints tried in order: the deployed app first, then local dev.
pub const DEFAULT_ENDPOINTS: [&str; 2] = [
    "https://tracking-jobs-git-main-pedros-projects-74eb8b5d.vercel.app/api/jobs/capture",
    "http://localhost:3000/api/jobs/capture",
];

pub const DEFAULT_USER_AGENT: &str = "Job Tracker Extension Tester/1.0";

/// Per-attempt budget covering connect, request and body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Config filenames checked in the working directory when `--config` is absent.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["capture-probe.toml", "capture-probe.json"];
