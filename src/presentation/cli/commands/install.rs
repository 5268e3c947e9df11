use colored::Colorize;
use tracing::debug;

use crate::application::use_cases::install_app::{InstallAppError, InstallAppUseCase};
use crate::common::result::{PamsResult, ResultExt};
use crate::domain::entities::AppsConfig;
use crate::infrastructure::console::LineWriter;
use crate::infrastructure::process::ProcessRunner;

/// Handler for `pams install <owner/repo>`
pub struct InstallCommand {
    pub identifier: Option<String>,
}

impl InstallCommand {
    pub fn new(identifier: Option<String>) -> Self {
        Self { identifier }
    }

    /// Every install failure is reported as a message; only console failures are returned.
    pub fn execute(
        &self,
        config: &AppsConfig,
        runner: &dyn ProcessRunner,
        output: &mut dyn LineWriter,
    ) -> PamsResult<()> {
        let use_case = InstallAppUseCase::new(config, runner);

        match use_case.execute(self.identifier.as_deref(), output) {
            Ok(_) => output
                .write_line(&"Install completed.".green().to_string())
                .with_console_error("Failed to write result"),
            Err(InstallAppError::Console(e)) => Err(e),
            Err(e) => {
                debug!(error = ?e, "install failed");
                output
                    .write_line(&e.to_string().red().to_string())
                    .with_console_error("Failed to write error")
            }
        }
    }
}
