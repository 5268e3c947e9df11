pub mod application;
pub mod apps_config;

pub use application::{parse_choice, Application, EntrySelection, SelectionError};
pub use apps_config::AppsConfig;
