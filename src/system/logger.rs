use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Variables checked, in order, for a filter directive.
const FILTER_ENV_VARS: [&str; 2] = ["CAPTURE_PROBE_LOG", "RUST_LOG"];

/// Installs the stderr subscriber. Stdout is left to the console report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(resolve_filter(env_directive(), verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

fn env_directive() -> Option<String> {
    FILTER_ENV_VARS
        .iter()
        .find_map(|name| std::env::var(name).ok())
}

/// Progress text goes to stdout, so only warnings are logged unless asked.
const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn resolve_filter(directive: Option<String>, verbose: bool) -> EnvFilter {
    let fallback = default_directive(verbose);
    directive
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}
