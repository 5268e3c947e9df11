//! # pams - a small package manager for script applications
//!
//! `pams` clones applications from a git hosting service into a single apps
//! directory and later launches their entry script with an interpreter.
//!
//! ```bash
//! pams install octocat/weather-bot   # git clone https://github.com/octocat/weather-bot.git
//! pams run weather-bot               # python main.py, or pick a script interactively
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: identifiers, configuration and the entry selection rules
//! - [`application`]: the install and run use cases
//! - [`infrastructure`]: process spawning, git, the interpreter, the apps
//!   directory and terminal line I/O
//! - [`presentation`]: argument parsing and dispatch
//! - [`common`]: crate-wide error type
//!
//! External processes and terminal I/O are reached only through the
//! [`ProcessRunner`](infrastructure::process::ProcessRunner),
//! [`LineReader`](infrastructure::console::LineReader) and
//! [`LineWriter`](infrastructure::console::LineWriter) traits, so every
//! workflow can be driven against a temporary directory with in-memory input.
//!
//! ```rust,no_run
//! use pams::domain::entities::AppsConfig;
//! use pams::application::use_cases::InstallAppUseCase;
//! use pams::infrastructure::process::SystemProcessRunner;
//!
//! let config = AppsConfig::new("/tmp/pams-apps");
//! let runner = SystemProcessRunner::new();
//! let mut stdout = std::io::stdout();
//! let outcome = InstallAppUseCase::new(&config, &runner)
//!     .execute(Some("octocat/weather-bot"), &mut stdout);
//! println!("{:?}", outcome.map(|o| o.path));
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::PamsError;
pub use crate::common::result::PamsResult as Result;
