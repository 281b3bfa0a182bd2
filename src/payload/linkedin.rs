use once_cell::sync::Lazy;
use regex::Regex;

/// Numeric job id following `jobs/view/` anywhere in a LinkedIn URL.
static JOB_VIEW_ID: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"jobs/view/([0-9]+)").ok());

/// Extracts the numeric job id from a LinkedIn job URL such as
/// `https://www.linkedin.com/jobs/view/3756432109/?refId=...`.
#[must_use]
pub fn external_id_from_url(url: &str) -> Option<String> {
    let pattern = (*JOB_VIEW_ID).as_ref()?;
    pattern
        .captures(url)?
        .get(1)
        .map(|id| id.as_str().to_owned())
}
