pub mod install_app;
pub mod run_app;

pub use install_app::{InstallAppError, InstallAppUseCase, InstallOutcome};
pub use run_app::{RunAppError, RunAppUseCase, RunOutcome};
