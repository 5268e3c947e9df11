use crate::domain::value_objects::app_name::AppName;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An installed application: a directory of scripts under the apps directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    name: AppName,
    path: PathBuf,
}

impl Application {
    pub fn new(name: AppName, path: impl Into<PathBuf>) -> Self {
        Self {
            name,
            path: path.into(),
        }
    }

    pub fn name(&self) -> &AppName {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Script chosen for a single launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelection {
    /// The conventional entry file was present
    Default(PathBuf),

    /// Picked by the user from the listed candidates (1-based index)
    Chosen { index: usize, path: PathBuf },
}

impl EntrySelection {
    pub fn path(&self) -> &Path {
        match self {
            EntrySelection::Default(path) => path,
            EntrySelection::Chosen { path, .. } => path,
        }
    }
}

/// Rejected answers to the "pick a script" prompt
#[derive(Debug, Error, PartialEq)]
pub enum SelectionError {
    #[error("Invalid input.")]
    NotANumber(String),

    #[error("Invalid selection.")]
    OutOfRange { choice: i32, count: usize },
}

/// Parse a 1-based choice among `count` candidates into a 0-based index.
pub fn parse_choice(input: &str, count: usize) -> Result<usize, SelectionError> {
    let trimmed = input.trim();
    let choice: i32 = trimmed
        .parse()
        .map_err(|_| SelectionError::NotANumber(trimmed.to_string()))?;

    match usize::try_from(choice) {
        Ok(index) if (1..=count).contains(&index) => Ok(index - 1),
        _ => Err(SelectionError::OutOfRange { choice, count }),
    }
}
