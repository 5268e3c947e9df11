//! Source control operations.
//!
//! Only the clone half of git is needed; it runs the `git` executable through a
//! [`ProcessRunner`](crate::infrastructure::process::ProcessRunner).

pub mod git_scm;

pub use git_scm::{GitScm, ScmError};
