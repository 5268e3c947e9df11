use crate::common::error::PamsError;
use crate::common::result::{PamsResult, ResultExt};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

/// Runtime configuration shared by the installer and the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppsConfig {
    /// Directory holding one subdirectory per installed application
    pub apps_dir: PathBuf,

    /// Version-control executable used for `clone`
    pub git_executable: String,

    /// Interpreter used to launch entry scripts
    pub interpreter: String,

    /// Hosting service the `owner/repo` identifiers refer to
    pub host: String,

    /// Entry file preferred over the interactive choice when present
    pub entry_file: String,

    /// Extension (without the dot) of launchable scripts
    pub script_extension: String,
}

impl AppsConfig {
    pub const DEFAULT_GIT: &'static str = "git";
    pub const DEFAULT_INTERPRETER: &'static str = "python";
    pub const DEFAULT_HOST: &'static str = "github.com";
    pub const DEFAULT_ENTRY_FILE: &'static str = "main.py";
    pub const DEFAULT_SCRIPT_EXTENSION: &'static str = "py";

    /// Configuration rooted at `apps_dir` with every other field defaulted
    pub fn new(apps_dir: impl Into<PathBuf>) -> Self {
        Self {
            apps_dir: apps_dir.into(),
            git_executable: Self::DEFAULT_GIT.to_string(),
            interpreter: Self::DEFAULT_INTERPRETER.to_string(),
            host: Self::DEFAULT_HOST.to_string(),
            entry_file: Self::DEFAULT_ENTRY_FILE.to_string(),
            script_extension: Self::DEFAULT_SCRIPT_EXTENSION.to_string(),
        }
    }

    /// Platform default apps directory.
    ///
    /// `C:\PAMS\apps` on Windows, `~/.pams/apps` elsewhere, and `./pams-apps`
    /// when no home directory can be determined.
    pub fn default_apps_dir() -> PathBuf {
        if cfg!(windows) {
            return PathBuf::from(r"C:\PAMS\apps");
        }

        BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".pams").join("apps"))
            .unwrap_or_else(|| PathBuf::from("pams-apps"))
    }

    pub fn with_git_executable(mut self, executable: impl Into<String>) -> Self {
        self.git_executable = executable.into();
        self
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Anchor a relative `apps_dir` at `base`.
    ///
    /// Scripts run with their application directory as the working directory,
    /// so every path handed to the interpreter must be absolute.
    pub fn with_apps_dir_relative_to(mut self, base: &Path) -> Self {
        if self.apps_dir.is_relative() {
            self.apps_dir = base.join(&self.apps_dir);
        }
        self
    }

    /// Make `apps_dir` absolute against the current directory
    pub fn resolve_apps_dir(self) -> PamsResult<Self> {
        if self.apps_dir.is_absolute() {
            return Ok(self);
        }

        let cwd = std::env::current_dir().with_filesystem_error(
            "Failed to determine the current directory",
            Some(self.apps_dir.clone()),
        )?;
        Ok(self.with_apps_dir_relative_to(&cwd))
    }

    /// Reject values that would make every command fail in a confusing way
    pub fn validate(&self) -> PamsResult<()> {
        if self.apps_dir.as_os_str().is_empty() {
            return Err(PamsError::config_error(
                "apps_dir",
                "must not be empty",
                None,
            ));
        }

        let required = [
            ("git_executable", &self.git_executable),
            ("interpreter", &self.interpreter),
            ("host", &self.host),
            ("entry_file", &self.entry_file),
            ("script_extension", &self.script_extension),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PamsError::config_error(
                    field,
                    "must not be empty",
                    Some(value.clone()),
                ));
            }
        }

        if self.script_extension.starts_with('.') {
            return Err(PamsError::config_error(
                "script_extension",
                "must not start with '.'",
                Some(self.script_extension.clone()),
            ));
        }

        Ok(())
    }

}
