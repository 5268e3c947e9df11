use std::fmt;
use std::path::{Component, Path};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AppNameError {
    #[error("Application name is empty")]
    Empty,

    #[error("Application name must be a single directory name: {0}")]
    NotSingleComponent(String),
}

/// Name of an installed application; a single directory under the apps directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl AppName {
    pub fn new(name: &str) -> Result<Self, AppNameError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppNameError::Empty);
        }

        // Exactly one normal component: rejects `.`, `..`, separators and roots.
        let mut components = Path::new(trimmed).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !trimmed.contains(['/', '\\']) => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(AppNameError::NotSingleComponent(trimmed.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<Path> for AppName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for AppName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
