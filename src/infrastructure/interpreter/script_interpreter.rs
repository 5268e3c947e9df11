use crate::infrastructure::process::{
    CommandExecutorError, CommandSpec, ExecutionResult, ProcessRunner,
};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum InterpreterError {
    #[error("Interpreter not found: {interpreter}")]
    NotFound { interpreter: String },

    #[error("{0}")]
    Process(#[from] CommandExecutorError),
}

/// External interpreter that runs one script file to completion
#[derive(Debug, Clone)]
pub struct ScriptInterpreter {
    executable: String,
}

impl ScriptInterpreter {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// `<interpreter> <script>` run from `working_dir`
    pub fn launch_command(&self, script: &Path, working_dir: &Path) -> CommandSpec {
        CommandSpec::new(&self.executable)
            .arg(script)
            .with_working_directory(working_dir)
    }

    /// Run `script` and wait for it. The exit code is returned for logging only.
    pub fn launch(
        &self,
        runner: &dyn ProcessRunner,
        script: &Path,
        working_dir: &Path,
    ) -> Result<ExecutionResult, InterpreterError> {
        let command = self.launch_command(script, working_dir);

        let result = runner.run(&command).map_err(|e| match e {
            CommandExecutorError::ExecutableNotFound { .. } => InterpreterError::NotFound {
                interpreter: self.executable.clone(),
            },
            other => InterpreterError::Process(other),
        })?;

        debug!(script = %script.display(), exit_code = ?result.exit_code, "script finished");
        Ok(result)
    }
}
