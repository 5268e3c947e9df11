use crate::common::error::PamsError;
use crate::common::result::{PamsResult, ResultExt};
use crate::domain::entities::{Application, AppsConfig};
use crate::domain::value_objects::AppName;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Filesystem view of the apps directory
#[derive(Debug, Clone)]
pub struct AppStore {
    apps_dir: PathBuf,
    entry_file: String,
    script_extension: String,
}

impl AppStore {
    pub fn new(config: &AppsConfig) -> Self {
        Self {
            apps_dir: config.apps_dir.clone(),
            entry_file: config.entry_file.clone(),
            script_extension: config.script_extension.clone(),
        }
    }

    pub fn apps_dir(&self) -> &Path {
        &self.apps_dir
    }

    /// Create the apps directory (and parents) if missing
    pub fn ensure_apps_dir(&self) -> PamsResult<()> {
        fs::create_dir_all(&self.apps_dir).with_filesystem_error(
            format!(
                "Failed to create apps directory {}",
                self.apps_dir.display()
            ),
            Some(self.apps_dir.clone()),
        )
    }

    /// Where an application named `name` lives, whether installed or not
    pub fn app_path(&self, name: &str) -> PathBuf {
        self.apps_dir.join(name)
    }

    /// Anything at the install location blocks a new install
    pub fn is_occupied(&self, name: &str) -> bool {
        self.app_path(name).exists()
    }

    pub fn find_application(&self, name: &AppName) -> Option<Application> {
        let path = self.app_path(name.as_str());
        path.is_dir().then(|| Application::new(name.clone(), path))
    }

    /// The conventional entry file, if present
    pub fn default_entry(&self, app: &Application) -> Option<PathBuf> {
        let entry = app.path().join(&self.entry_file);
        entry.is_file().then_some(entry)
    }

    /// Script files directly inside the application directory, sorted by name.
    ///
    /// Entries that cannot be read, such as dangling symlinks, are skipped.
    /// Only a failure to read the directory itself is an error.
    pub fn list_scripts(&self, app: &Application) -> PamsResult<Vec<PathBuf>> {
        let mut scripts = Vec::new();

        let walker = WalkDir::new(app.path())
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() > 0 => {
                    debug!(error = %e, "skipping unreadable entry");
                    continue;
                }
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf);
                    let io_error = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, "symlink loop"));
                    return Err(PamsError::filesystem_error_with_source(
                        "Failed to list application directory",
                        path,
                        io_error,
                    ));
                }
            };

            if entry.file_type().is_file() && self.has_script_extension(entry.path()) {
                scripts.push(entry.into_path());
            }
        }

        debug!(app = %app.name(), count = scripts.len(), "discovered scripts");
        Ok(scripts)
    }

    fn has_script_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(&self.script_extension))
    }
}
