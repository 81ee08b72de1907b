#![allow(dead_code)]

use ruso::{run_script, Interpreter};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

pub type TestInterpreter = Interpreter<&'static [u8], Vec<u8>>;

/// Run a script with empty stdin and return what it printed.
pub fn run(source: &str) -> String {
    run_with_input(source, "")
}

pub fn run_with_input(source: &str, input: &str) -> String {
    run_script(source, input).expect("script should run without an uncaught fault")
}

pub fn interpreter(input: &'static str) -> TestInterpreter {
    Interpreter::new(input.as_bytes(), Vec::new())
}

pub fn output(interpreter: TestInterpreter) -> String {
    String::from_utf8(interpreter.into_output()).expect("output should be UTF-8")
}

/// Helper struct to create and automatically clean up temporary script files
pub struct TempScript {
    path: PathBuf,
}

impl TempScript {
    pub fn new(name: &str, content: &str) -> std::io::Result<Self> {
        let path = std::env::temp_dir().join(format!("ruso_test_{}_{}.ruso", std::process::id(), name));
        let mut file = File::create(&path)?;
        file.write_all(content.as_bytes())?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempScript {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
