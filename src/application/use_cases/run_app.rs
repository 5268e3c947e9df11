use crate::common::error::PamsError;
use crate::common::result::{PamsResult, ResultExt};
use crate::domain::entities::{parse_choice, Application, AppsConfig, EntrySelection, SelectionError};
use crate::domain::value_objects::{AppName, AppNameError};
use crate::infrastructure::console::{LineReader, LineWriter};
use crate::infrastructure::filesystem::AppStore;
use crate::infrastructure::interpreter::{InterpreterError, ScriptInterpreter};
use crate::infrastructure::process::ProcessRunner;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Launch failures. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum RunAppError {
    #[error("Missing application name.")]
    MissingAppName,

    #[error("Invalid application name: {0}")]
    InvalidAppName(#[source] AppNameError),

    #[error("Application is not installed.")]
    NotInstalled(PathBuf),

    #[error("No {kind} files found.")]
    NoScripts { kind: String, path: PathBuf },

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Failed to launch script: {0}")]
    LaunchFailed(#[source] InterpreterError),

    #[error("{0}")]
    Store(#[source] PamsError),

    #[error("{0}")]
    Console(#[source] PamsError),
}

/// What was launched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub application: Application,
    pub selection: EntrySelection,
    /// Interpreter exit code, informational only
    pub exit_code: Option<i32>,
}

/// Finds an application's entry script and runs it with the interpreter
pub struct RunAppUseCase<'a> {
    config: &'a AppsConfig,
    runner: &'a dyn ProcessRunner,
}

impl<'a> RunAppUseCase<'a> {
    pub fn new(config: &'a AppsConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self { config, runner }
    }

    pub fn execute(
        &self,
        app_name: Option<&str>,
        input: &mut dyn LineReader,
        output: &mut dyn LineWriter,
    ) -> Result<RunOutcome, RunAppError> {
        let raw = app_name
            .filter(|s| !s.trim().is_empty())
            .ok_or(RunAppError::MissingAppName)?;
        let name = AppName::new(raw).map_err(RunAppError::InvalidAppName)?;

        let store = AppStore::new(self.config);
        let application = store
            .find_application(&name)
            .ok_or_else(|| RunAppError::NotInstalled(store.app_path(name.as_str())))?;

        let selection = self.resolve_entry(&store, &application, input, output)?;
        debug!(app = %name, script = %selection.path().display(), "entry script selected");

        let interpreter = ScriptInterpreter::new(&self.config.interpreter);
        let result = interpreter
            .launch(self.runner, selection.path(), application.path())
            .map_err(RunAppError::LaunchFailed)?;

        info!(app = %name, exit_code = ?result.exit_code, "application exited");

        Ok(RunOutcome {
            application,
            selection,
            exit_code: result.exit_code,
        })
    }

    /// Default entry file when present, otherwise an interactive pick.
    pub fn resolve_entry(
        &self,
        store: &AppStore,
        application: &Application,
        input: &mut dyn LineReader,
        output: &mut dyn LineWriter,
    ) -> Result<EntrySelection, RunAppError> {
        if let Some(entry) = store.default_entry(application) {
            return Ok(EntrySelection::Default(entry));
        }

        let scripts = store.list_scripts(application).map_err(RunAppError::Store)?;
        if scripts.is_empty() {
            return Err(RunAppError::NoScripts {
                kind: self.script_kind(),
                path: application.path().to_path_buf(),
            });
        }

        let answer = self
            .prompt_for_choice(&scripts, input, output)
            .map_err(RunAppError::Console)?;
        let index = parse_choice(&answer, scripts.len())?;

        Ok(EntrySelection::Chosen {
            index: index + 1,
            path: scripts[index].clone(),
        })
    }

    fn prompt_for_choice(
        &self,
        scripts: &[PathBuf],
        input: &mut dyn LineReader,
        output: &mut dyn LineWriter,
    ) -> PamsResult<String> {
        output
            .write_line(&format!("Select a {} file to run:", self.script_kind()))
            .with_console_error("Failed to write menu")?;

        for (i, script) in scripts.iter().enumerate() {
            output
                .write_line(&format!("{}) {}", i + 1, file_name(script)))
                .with_console_error("Failed to write menu")?;
        }

        output
            .write_prompt("Choice: ")
            .with_console_error("Failed to write prompt")?;

        let line = input
            .next_line()
            .with_console_error("Failed to read choice")?;
        Ok(line.unwrap_or_default())
    }

    /// Human label for the script type, e.g. "Python" for `py`
    fn script_kind(&self) -> String {
        match self.config.script_extension.to_ascii_lowercase().as_str() {
            "py" => "Python".to_string(),
            other => format!(".{}", other),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
