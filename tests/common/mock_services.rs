//! Fake process runner for integration tests
//!
//! Records every command instead of spawning it and answers with scripted exit
//! codes. A successful `git clone` can optionally materialise the target
//! directory so install-then-run flows work end to end.

use pams::infrastructure::process::{
    CommandExecutorError, CommandSpec, ExecutionResult, ProcessRunner,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;

#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    exit_codes: RefCell<VecDeque<i32>>,
    clone_files: Vec<(String, String)>,
    missing_executable: bool,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes returned in order; 0 once exhausted
    pub fn with_exit_codes(self, codes: &[i32]) -> Self {
        self.exit_codes.borrow_mut().extend(codes.iter().copied());
        self
    }

    /// Files written into the clone target when `git clone` succeeds
    pub fn with_clone_files(mut self, files: &[(&str, &str)]) -> Self {
        self.clone_files = files
            .iter()
            .map(|(name, content)| (name.to_string(), content.to_string()))
            .collect();
        self
    }

    /// Behave as if the executable does not exist
    pub fn missing_executable(mut self) -> Self {
        self.missing_executable = true;
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<ExecutionResult, CommandExecutorError> {
        self.calls.borrow_mut().push(command.clone());

        if self.missing_executable {
            return Err(CommandExecutorError::ExecutableNotFound {
                program: command.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }

        let code = self.exit_codes.borrow_mut().pop_front().unwrap_or(0);

        let is_clone = command.args.first().is_some_and(|a| a == "clone");
        if is_clone && code == 0 && !self.clone_files.is_empty() {
            if let Some(target) = command.args.last() {
                let target = PathBuf::from(target);
                std::fs::create_dir_all(&target).unwrap();
                for (name, content) in &self.clone_files {
                    std::fs::write(target.join(name), content).unwrap();
                }
            }
        }

        Ok(ExecutionResult::from_code(code))
    }
}
