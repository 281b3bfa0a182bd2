use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{ProbeArgs, parse_endpoint, parse_header};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::ConfigFile;

/// Applies configuration values to CLI arguments. Values given on the
/// command line always win.
///
/// # Errors
///
/// Returns an error when config values are invalid.
pub fn apply_config(
    args: &mut ProbeArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if args.user_id.is_none()
        && let Some(user_id) = config.user_id.clone()
    {
        args.user_id = Some(user_id);
    }

    if !is_cli(matches, "endpoints")
        && let Some(endpoints) = config.endpoints.as_ref()
    {
        if endpoints.is_empty() {
            return Err(AppError::config(ConfigError::EndpointsEmpty));
        }
        args.endpoints = parse_endpoints(endpoints)?;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = timeout
            .to_duration()
            .map_err(|err| AppError::config(ConfigError::InvalidTimeout { source: err }))?;
    }

    if !is_cli(matches, "user_agent")
        && let Some(user_agent) = config.user_agent.clone()
    {
        args.user_agent = user_agent;
    }

    if !is_cli(matches, "headers")
        && let Some(headers) = config.headers.as_ref()
    {
        args.headers = parse_headers(headers)?;
    }

    if !is_cli(matches, "mode")
        && let Some(mode) = config.mode
    {
        args.mode = Some(mode);
    }

    if !is_cli(matches, "job_url")
        && let Some(job_url) = config.job_url.clone()
    {
        args.job_url = Some(job_url);
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn parse_headers(headers: &[String]) -> AppResult<Vec<(String, String)>> {
    let mut parsed = Vec::with_capacity(headers.len());
    for header in headers {
        parsed.push(
            parse_header(header)
                .map_err(|err| AppError::config(ConfigError::InvalidHeader { source: err }))?,
        );
    }
    Ok(parsed)
}

fn parse_endpoints(endpoints: &[String]) -> AppResult<Vec<String>> {
    let mut parsed = Vec::with_capacity(endpoints.len());
    for endpoint in endpoints {
        parsed.push(
            parse_endpoint(endpoint)
                .map_err(|err| AppError::config(ConfigError::InvalidEndpoint { source: err }))?,
        );
    }
    Ok(parsed)
}
