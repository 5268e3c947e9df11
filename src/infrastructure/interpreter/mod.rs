pub mod script_interpreter;

pub use script_interpreter::{InterpreterError, ScriptInterpreter};
