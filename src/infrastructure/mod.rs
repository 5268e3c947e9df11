//! Infrastructure layer modules
//!
//! This layer provides concrete implementations for external system interactions:
//! - Process execution behind the [`ProcessRunner`] seam
//! - Git clone through the `git` executable
//! - Script launching through an external interpreter
//! - The apps directory on disk
//! - Line-based terminal input and output
pub mod console;
pub mod filesystem;
pub mod interpreter;
pub mod process;
pub mod scm;

// Re-export commonly used types
pub use console::{LineReader, LineWriter};
pub use filesystem::AppStore;
pub use interpreter::{InterpreterError, ScriptInterpreter};
pub use process::{CommandExecutorError, CommandSpec, ExecutionResult, ProcessRunner, SystemProcessRunner};
pub use scm::{GitScm, ScmError};
