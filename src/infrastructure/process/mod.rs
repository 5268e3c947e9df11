pub mod command_executor;

pub use command_executor::{
    CommandExecutorError,
    CommandSpec,
    ExecutionResult,
    ProcessRunner,
    SystemProcessRunner,
};

#[cfg(test)]
pub use command_executor::MockProcessRunner;
