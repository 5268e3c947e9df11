pub mod install;
pub mod run;

pub use install::*;
pub use run::*;
