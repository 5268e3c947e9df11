pub mod app_name;
pub mod repo_identifier;

pub use app_name::{AppName, AppNameError};
pub use repo_identifier::{RepoIdentifier, RepoIdentifierError};
