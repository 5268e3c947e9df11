use crate::common::error::PamsError;
use crate::common::result::ResultExt;
use crate::domain::entities::AppsConfig;
use crate::domain::value_objects::{RepoIdentifier, RepoIdentifierError};
use crate::infrastructure::console::LineWriter;
use crate::infrastructure::filesystem::AppStore;
use crate::infrastructure::process::ProcessRunner;
use crate::infrastructure::scm::{GitScm, ScmError};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

/// Install failures. `Display` is the message shown to the user.
#[derive(Debug, Error)]
pub enum InstallAppError {
    #[error("Missing repository name.")]
    MissingIdentifier,

    #[error("Repository format must be owner/repo")]
    InvalidIdentifier(#[source] RepoIdentifierError),

    #[error(transparent)]
    InvalidUrl(RepoIdentifierError),

    #[error("Application is already installed.")]
    AlreadyInstalled(PathBuf),

    #[error("Git clone failed.")]
    CloneFailed(#[source] ScmError),

    #[error("Git clone failed: {0}")]
    CloneNotStarted(#[source] ScmError),

    #[error("{0}")]
    Console(#[source] PamsError),
}

/// What a successful install produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub identifier: RepoIdentifier,
    pub url: Url,
    pub path: PathBuf,
}

/// Clones `owner/repo` into `<apps_dir>/<repo>`
pub struct InstallAppUseCase<'a> {
    config: &'a AppsConfig,
    runner: &'a dyn ProcessRunner,
}

impl<'a> InstallAppUseCase<'a> {
    pub fn new(config: &'a AppsConfig, runner: &'a dyn ProcessRunner) -> Self {
        Self { config, runner }
    }

    pub fn execute(
        &self,
        identifier: Option<&str>,
        output: &mut dyn LineWriter,
    ) -> Result<InstallOutcome, InstallAppError> {
        let raw = identifier
            .filter(|s| !s.trim().is_empty())
            .ok_or(InstallAppError::MissingIdentifier)?;

        let identifier = RepoIdentifier::parse(raw).map_err(InstallAppError::InvalidIdentifier)?;

        let store = AppStore::new(self.config);
        let path = store.app_path(identifier.name());
        if store.is_occupied(identifier.name()) {
            debug!(path = %path.display(), "install target already exists");
            return Err(InstallAppError::AlreadyInstalled(path));
        }

        let url = identifier
            .clone_url(&self.config.host)
            .map_err(InstallAppError::InvalidUrl)?;

        output
            .write_line(&format!("Installing {}...", identifier))
            .with_console_error("Failed to write progress")
            .map_err(InstallAppError::Console)?;

        let git = GitScm::with_executable(&self.config.git_executable);
        git.clone_repository(self.runner, &url, &path)
            .map_err(|e| match e {
                ScmError::CloneFailed { .. } => InstallAppError::CloneFailed(e),
                other => InstallAppError::CloneNotStarted(other),
            })?;

        info!(%identifier, path = %path.display(), "application installed");

        Ok(InstallOutcome {
            identifier,
            url,
            path,
        })
    }
}
