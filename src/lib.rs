pub mod cli;
pub mod config;
pub mod interpreter;
pub mod lexer;
pub mod logging;
pub mod token;

pub use interpreter::{run_script, Environment, Fault, Interpreter, ScriptError};
pub use token::Keyword;
