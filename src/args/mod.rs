//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;
mod types;


pub use cli::ProbeArgs;
pub use defaults::{DEFAULT_ENDPOINTS, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
pub use types::TestMode;

pub(crate) use defaults::DEFAULT_CONFIG_FILES;
pub(crate) use parsers::{parse_duration_arg, parse_endpoint, parse_header};
