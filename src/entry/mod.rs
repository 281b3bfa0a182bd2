mod session;


use std::io::IsTerminal;
use std::process::ExitCode;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tokio::io::BufReader;
use tracing::{debug, error, warn};

use crate::args::ProbeArgs;
use crate::console::Prompter;
use crate::error::AppResult;
use crate::http::{CaptureClientConfig, ReqwestCaptureAdapter};
use crate::probe::Tester;

pub use session::{Session, SessionOptions, SessionOutcome};

/// Parses arguments, applies config, and drives one interactive session.
///
/// Returns the process exit code for completed, failed and interrupted
/// runs.
///
/// # Errors
///
/// Returns an error for invalid config, HTTP client setup failures, and
/// anything the session itself cannot recover from.
pub fn run() -> AppResult<ExitCode> {
    let (mut args, matches) = parse_args()?;

    crate::system::logger::init_logging(args.verbose, args.no_color);
    apply_config(&mut args, &matches).inspect_err(|err| error!("{}", err))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(run_async(&args));
    // A prompt may still be blocked on stdin; don't wait for it.
    runtime.shutdown_background();
    result
}

fn parse_args() -> AppResult<(ProbeArgs, ArgMatches)> {
    let matches = ProbeArgs::command().get_matches();
    let args = ProbeArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn apply_config(args: &mut ProbeArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

async fn run_async(args: &ProbeArgs) -> AppResult<ExitCode> {
    let adapter = ReqwestCaptureAdapter::new(&CaptureClientConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.clone(),
        headers: args.headers.clone(),
    })
    .inspect_err(|err| error!("{}", err))?;
    let tester = Tester::new(adapter, args.endpoint_list());
    debug!(
        "Endpoints: {:?}, timeout: {:?}",
        tester.endpoints(),
        args.timeout
    );

    let stdout = std::io::stdout();
    let options = SessionOptions {
        mode: args.mode,
        job_url: args.job_url.clone(),
        use_color: !args.no_color && stdout.is_terminal(),
    };
    let mut session = Session::new(
        &tester,
        Prompter::new(BufReader::new(tokio::io::stdin())),
        stdout,
        options,
    );

    tokio::select! {
        outcome = session.run(args.user_id.clone()) => Ok(outcome?.exit_code()),
        () = interrupted() => {
            println!("\n\n👋 Test cancelled by user");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn interrupted() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
}
