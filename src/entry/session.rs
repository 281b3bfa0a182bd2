use std::io::Write;
use std::process::ExitCode;

use chrono::Local;
use tokio::io::AsyncBufRead;
use tracing::{debug, warn};

use crate::args::TestMode;
use crate::console::Prompter;
use crate::error::AppResult;
use crate::http::CapturePort;
use crate::payload::{CustomJobInput, custom_job};
use crate::probe::Tester;
use crate::system::banner::write_banner;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    /// No user id was given; nothing was sent.
    MissingUserId,
    /// The sample sweep found no working endpoint.
    SampleFailed,
}

impl SessionOutcome {
    #[must_use]
    pub const fn exit_code(self) -> ExitCode {
        match self {
            SessionOutcome::Completed => ExitCode::SUCCESS,
            SessionOutcome::MissingUserId | SessionOutcome::SampleFailed => ExitCode::FAILURE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Preselected mode; the menu is shown when unset.
    pub mode: Option<TestMode>,
    pub job_url: Option<String>,
    pub use_color: bool,
}

/// One run of the menu flow: user id, mode choice, then the selected tests.
pub struct Session<'tester, P, R, W> {
    tester: &'tester Tester<P>,
    prompter: Prompter<R>,
    out: W,
    options: SessionOptions,
}

impl<'tester, P, R, W> Session<'tester, P, R, W>
where
    P: CapturePort,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub const fn new(
        tester: &'tester Tester<P>,
        prompter: Prompter<R>,
        out: W,
        options: SessionOptions,
    ) -> Self {
        Self {
            tester,
            prompter,
            out,
            options,
        }
    }

    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Runs the flow. `user_id` comes from the command line; it is prompted
    /// for when absent.
    ///
    /// A failing sample sweep ends the session before the custom prompts,
    /// even when both modes were selected.
    ///
    /// # Errors
    ///
    /// Returns an error when console I/O fails or input closes mid-prompt.
    pub async fn run(&mut self, user_id: Option<String>) -> AppResult<SessionOutcome> {
        write_banner(&mut self.out, self.options.use_color)?;

        let user_id = match user_id {
            Some(user_id) => user_id,
            None => {
                self.prompter
                    .ask(&mut self.out, "Enter your User ID (extension code): ")
                    .await?
            }
        };
        if user_id.is_empty() {
            writeln!(self.out, "❌ User ID is required!")?;
            return Ok(SessionOutcome::MissingUserId);
        }

        let Some(mode) = self.resolve_mode().await? else {
            return Ok(SessionOutcome::Completed);
        };
        debug!("Running {} mode", mode.as_str());

        if mode.includes_sample() {
            writeln!(self.out)?;
            writeln!(self.out, "🧪 RUNNING SAMPLE DATA TEST")?;
            if !self.tester.test_all_endpoints(&mut self.out, &user_id).await? {
                return Ok(SessionOutcome::SampleFailed);
            }
        }

        if mode.includes_custom() {
            self.run_custom(&user_id).await?;
        }

        Ok(SessionOutcome::Completed)
    }

    async fn resolve_mode(&mut self) -> AppResult<Option<TestMode>> {
        if let Some(mode) = self.options.mode {
            return Ok(Some(mode));
        }

        writeln!(self.out)?;
        writeln!(self.out, "Available options:")?;
        writeln!(self.out, "1. Test with sample data")?;
        writeln!(self.out, "2. Test with custom data")?;
        writeln!(self.out, "3. Test both")?;
        let choice = self
            .prompter
            .ask(&mut self.out, "\nChoose an option (1-3) [1]: ")
            .await?;

        let mode = TestMode::from_menu_choice(&choice);
        if mode.is_none() {
            warn!("Unknown menu option '{}'", choice);
            writeln!(self.out, "⚠️  Unknown option '{}', nothing to run", choice)?;
        }
        Ok(mode)
    }

    async fn run_custom(&mut self, user_id: &str) -> AppResult<()> {
        writeln!(self.out)?;
        writeln!(self.out, "📝 CUSTOM DATA")?;
        writeln!(self.out, "Enter the job details (or press Enter to skip):")?;

        let title = self.prompter.ask(&mut self.out, "Job title: ").await?;
        let company = self.prompter.ask(&mut self.out, "Company: ").await?;
        let location = self.prompter.ask(&mut self.out, "Location: ").await?;
        let input = CustomJobInput {
            title,
            company,
            location,
            job_url: self.options.job_url.clone(),
        };

        if !input.is_complete() {
            writeln!(self.out, "⏭️  Skipping custom data test")?;
            return Ok(());
        }

        let payload = custom_job(&input, &Local::now());
        self.tester
            .test_custom_data(&mut self.out, user_id, payload)
            .await
    }
}
