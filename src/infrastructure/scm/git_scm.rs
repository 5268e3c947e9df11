use crate::infrastructure::process::{CommandExecutorError, CommandSpec, ProcessRunner};
use std::path::Path;
use tracing::{debug, warn};
use url::Url;

/// Errors that can occur during SCM operations
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("Clone operation failed: {url}, exit code: {exit_code:?}")]
    CloneFailed { url: String, exit_code: Option<i32> },

    #[error("SCM executable not found: {executable}")]
    ExecutableNotFound { executable: String },

    #[error("{0}")]
    Process(#[from] CommandExecutorError),
}

/// Git implementation of the clone operation, shelling out to the `git` CLI
#[derive(Debug, Clone)]
pub struct GitScm {
    git_executable: String,
}

impl Default for GitScm {
    fn default() -> Self {
        Self {
            git_executable: "git".to_string(),
        }
    }
}

impl GitScm {
    /// Create a new Git SCM instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new Git SCM instance with custom executable path
    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            git_executable: executable.into(),
        }
    }

    /// `git clone <url> <dest>`
    pub fn clone_command(&self, url: &Url, dest_path: &Path) -> CommandSpec {
        CommandSpec::new(&self.git_executable)
            .arg("clone")
            .arg(url.as_str())
            .arg(dest_path)
    }

    /// Clone `url` into `dest_path`, blocking until git exits.
    ///
    /// A partially written `dest_path` is left behind on failure.
    pub fn clone_repository(
        &self,
        runner: &dyn ProcessRunner,
        url: &Url,
        dest_path: &Path,
    ) -> Result<(), ScmError> {
        let command = self.clone_command(url, dest_path);
        debug!(%url, dest = %dest_path.display(), "cloning repository");

        let result = runner.run(&command).map_err(|e| match e {
            CommandExecutorError::ExecutableNotFound { .. } => ScmError::ExecutableNotFound {
                executable: self.git_executable.clone(),
            },
            other => ScmError::Process(other),
        })?;

        if !result.success {
            warn!(%url, exit_code = ?result.exit_code, "git clone exited unsuccessfully");
            return Err(ScmError::CloneFailed {
                url: url.to_string(),
                exit_code: result.exit_code,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::process::{ExecutionResult, MockProcessRunner};
    use std::ffi::OsString;
    use std::path::PathBuf;

    fn url() -> Url {
        Url::parse("https://github.com/owner/repo.git").unwrap()
    }

    #[test]
    fn test_clone_command_shape() {
        let git = GitScm::with_executable("/opt/git/bin/git");
        let command = git.clone_command(&url(), Path::new("/apps/repo"));

        assert_eq!(command.program, "/opt/git/bin/git");
        assert_eq!(
            command.args,
            vec![
                OsString::from("clone"),
                OsString::from("https://github.com/owner/repo.git"),
                OsString::from("/apps/repo"),
            ]
        );
        assert_eq!(command.working_directory, None);
    }

    #[test]
    fn test_clone_success() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|c| c.program == "git" && c.args_lossy()[0] == "clone")
            .times(1)
            .returning(|_| Ok(ExecutionResult::from_code(0)));

        let result = GitScm::new().clone_repository(&runner, &url(), &PathBuf::from("/apps/repo"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_clone_non_zero_exit() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .returning(|_| Ok(ExecutionResult::from_code(128)));

        let result = GitScm::new().clone_repository(&runner, &url(), Path::new("/apps/repo"));
        assert!(matches!(
            result,
            Err(ScmError::CloneFailed {
                exit_code: Some(128),
                ..
            })
        ));
    }

    #[test]
    fn test_clone_missing_executable() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().returning(|c| {
            Err(CommandExecutorError::ExecutableNotFound {
                program: c.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        });

        let result = GitScm::with_executable("gitx").clone_repository(
            &runner,
            &url(),
            Path::new("/apps/repo"),
        );
        match result {
            Err(ScmError::ExecutableNotFound { executable }) => assert_eq!(executable, "gitx"),
            other => panic!("Expected ExecutableNotFound, got {:?}", other),
        }
    }
}
