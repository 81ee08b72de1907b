pub mod control_flow;
pub mod dispatcher;
pub mod environment;
pub mod error;
pub mod evaluator;

pub use dispatcher::{run_script, Interpreter, EXCEPTION_VARIABLE, TRUTHY};
pub use environment::Environment;
pub use error::{Fault, ScriptError};
pub use evaluator::{render_array, INPUT_KEYWORD};
