use std::ffi::{OsStr, OsString};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::Instant;
use thiserror::Error;
use tracing::debug;

/// Command executor errors
#[derive(Debug, Error)]
pub enum CommandExecutorError {
    #[error("Executable not found: {program}")]
    ExecutableNotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Process spawn failed for '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// A fully described external command: program, argument vector and working directory.
///
/// Kept as plain data so callers and tests can inspect exactly what would be spawned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program to execute, resolved through `PATH` when not a path
    pub program: String,

    /// Arguments passed verbatim, without shell interpretation
    pub args: Vec<OsString>,

    /// Working directory for the child; inherits ours when `None`
    pub working_directory: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_directory: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    pub fn with_working_directory<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.working_directory = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Arguments as UTF-8 strings, replacing invalid sequences
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,

    /// Execution time in milliseconds
    pub execution_time_ms: u64,

    /// Whether the command was successful (exit code 0)
    pub success: bool,
}

impl ExecutionResult {
    pub fn new(exit_code: Option<i32>, execution_time_ms: u64) -> Self {
        Self {
            exit_code,
            execution_time_ms,
            success: exit_code == Some(0),
        }
    }

    /// Result carrying only an exit code
    pub fn from_code(exit_code: i32) -> Self {
        Self::new(Some(exit_code), 0)
    }

    fn from_status(status: ExitStatus, execution_time_ms: u64) -> Self {
        Self::new(status.code(), execution_time_ms)
    }
}

/// Spawns an external command and blocks until it exits.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError>;
}

/// [`ProcessRunner`] backed by `std::process`, with the child sharing our stdio.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError> {
        if command.program.trim().is_empty() {
            return Err(CommandExecutorError::InvalidCommand(
                "Command is empty".to_string(),
            ));
        }

        let start_time = Instant::now();

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if let Some(working_dir) = &command.working_directory {
            cmd.current_dir(working_dir);
        }

        debug!(command = %command, cwd = ?command.working_directory, "spawning process");

        let status = cmd.status().map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                CommandExecutorError::ExecutableNotFound {
                    program: command.program.clone(),
                    source,
                }
            } else {
                CommandExecutorError::SpawnFailed {
                    program: command.program.clone(),
                    source,
                }
            }
        })?;

        let result =
            ExecutionResult::from_status(status, start_time.elapsed().as_millis() as u64);
        debug!(
            command = %command,
            exit_code = ?result.exit_code,
            elapsed_ms = result.execution_time_ms,
            "process exited"
        );

        Ok(result)
    }
}
