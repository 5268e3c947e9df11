use colored::Colorize;
use tracing::debug;

use crate::application::use_cases::run_app::{RunAppError, RunAppUseCase};
use crate::common::result::{PamsResult, ResultExt};
use crate::domain::entities::AppsConfig;
use crate::infrastructure::console::{LineReader, LineWriter};
use crate::infrastructure::process::ProcessRunner;

/// Handler for `pams run <app-name>`
pub struct RunCommand {
    pub app_name: Option<String>,
}

impl RunCommand {
    pub fn new(app_name: Option<String>) -> Self {
        Self { app_name }
    }

    pub fn execute(
        &self,
        config: &AppsConfig,
        runner: &dyn ProcessRunner,
        input: &mut dyn LineReader,
        output: &mut dyn LineWriter,
    ) -> PamsResult<()> {
        let use_case = RunAppUseCase::new(config, runner);

        match use_case.execute(self.app_name.as_deref(), input, output) {
            Ok(_) => Ok(()),
            Err(RunAppError::Console(e)) => Err(e),
            Err(e) => {
                debug!(error = ?e, "run failed");
                output
                    .write_line(&e.to_string().red().to_string())
                    .with_console_error("Failed to write error")
            }
        }
    }
}
