use std::io::{self, BufRead, StdinLock, Stdout, Write};

use tracing::debug;

use super::control_flow::{self, skip_chars};
use super::environment::Environment;
use super::error::{Fault, ScriptError};
use super::evaluator::strip_quotes;
use crate::token::Keyword;

/// The one value every condition is compared against.
pub const TRUTHY: &str = "true";

/// Variable bound to the fault description inside a `catch` block.
pub const EXCEPTION_VARIABLE: &str = "exception";

/// A line interpreter: a state store plus the streams `print` writes to and
/// `input` reads from.
pub struct Interpreter<R, W> {
    pub(super) env: Environment,
    pub(super) input: R,
    output: W,
}

impl Interpreter<StdinLock<'static>, Stdout> {
    /// An interpreter wired to the process's standard streams.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            env: Environment::new(),
            input,
            output,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Bind an array. The language itself has no way to build one.
    pub fn define_array<I, S>(&mut self, name: impl Into<String>, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.env.set_array(name, items);
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Execute every line of `script` as one statement, stopping at the first
    /// fault that nothing caught.
    pub fn run<B: BufRead>(&mut self, script: B) -> Result<(), ScriptError> {
        for (index, line) in script.lines().enumerate() {
            let line = line.map_err(ScriptError::Read)?;
            self.execute(&line)
                .map_err(|fault| ScriptError::Fault { line: index + 1, fault })?;
        }
        self.output.flush().map_err(ScriptError::Flush)
    }

    pub fn run_source(&mut self, source: &str) -> Result<(), ScriptError> {
        self.run(source.as_bytes())
    }

    /// Execute a single statement.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn execute(&mut self, statement: &str) -> Result<(), Fault> {
        let statement = statement.trim();

        match Keyword::classify(statement) {
            Some(Keyword::Print) => self.execute_print(statement),
            Some(Keyword::Def) => self.execute_def(statement),
            Some(keyword @ (Keyword::If | Keyword::Elif)) => self.execute_conditional(statement, keyword),
            Some(Keyword::Else) => self.execute_else(statement),
            Some(Keyword::Try) => self.execute_try(statement),
            Some(Keyword::While) => self.execute_while(statement),
            _ => self.execute_assignment(statement),
        }
    }

    /// Execute the statements held in a block's text, in order.
    pub fn execute_block(&mut self, block: &str) -> Result<(), Fault> {
        for statement in control_flow::split_statements(block) {
            self.execute(statement)?;
        }
        Ok(())
    }

    fn execute_print(&mut self, statement: &str) -> Result<(), Fault> {
        let operand = &statement[skip_chars(statement, Keyword::Print.as_str().len() + 1)?..];

        let text = if let Some(inner) = strip_quotes(operand, '"') {
            inner.to_string()
        } else if let Some(value) = self.env.get(operand) {
            value.to_string()
        } else {
            self.evaluate(operand)?
        };

        writeln!(self.output, "{}", text).map_err(Fault::Output)
    }

    fn execute_def(&mut self, statement: &str) -> Result<(), Fault> {
        let Some(def) = control_flow::extract_def(statement)? else {
            return Self::skip_malformed(Keyword::Def, statement);
        };
        debug!(name = def.name, params = ?def.params, "defined function body");
        self.env.set(def.name, def.body);
        Ok(())
    }

    fn execute_conditional(&mut self, statement: &str, keyword: Keyword) -> Result<(), Fault> {
        let Some(conditional) = control_flow::extract_conditional(statement, keyword)? else {
            return Self::skip_malformed(keyword, statement);
        };

        for arm in &conditional.arms {
            if self.evaluate(arm.condition)? == TRUTHY {
                return self.execute_block(arm.block);
            }
        }

        match conditional.otherwise {
            Some(block) => self.execute_block(block),
            None => Ok(()),
        }
    }

    fn execute_else(&mut self, statement: &str) -> Result<(), Fault> {
        match control_flow::extract_else(statement)? {
            Some(block) => self.execute_block(block),
            None => Self::skip_malformed(Keyword::Else, statement),
        }
    }

    fn execute_try(&mut self, statement: &str) -> Result<(), Fault> {
        let Some(guarded) = control_flow::extract_try(statement)? else {
            return Self::skip_malformed(Keyword::Try, statement);
        };

        if let Err(fault) = self.execute_block(guarded.body) {
            debug!(%fault, "caught fault");
            self.env.set(EXCEPTION_VARIABLE, fault.to_string());
            self.execute_block(guarded.handler)?;
        }
        Ok(())
    }

    fn execute_while(&mut self, statement: &str) -> Result<(), Fault> {
        let Some(lp) = control_flow::extract_while(statement)? else {
            return Self::skip_malformed(Keyword::While, statement);
        };

        while self.evaluate(lp.condition)? == TRUTHY {
            self.execute_block(lp.body)?;
        }
        Ok(())
    }

    fn execute_assignment(&mut self, statement: &str) -> Result<(), Fault> {
        let Some((name, expression)) = statement.split_once('=') else {
            if !statement.is_empty() {
                debug!(statement, "not an assignment, skipping");
            }
            return Ok(());
        };

        let value = self.evaluate(expression)?;
        self.env.set(name.trim(), value);
        Ok(())
    }

    fn skip_malformed(keyword: Keyword, statement: &str) -> Result<(), Fault> {
        debug!(%keyword, statement, "malformed construct, skipping");
        Ok(())
    }
}

/// Run `source` against `input` and collect everything it printed.
pub fn run_script(source: &str, input: &str) -> Result<String, ScriptError> {
    let mut interpreter = Interpreter::new(input.as_bytes(), Vec::new());
    interpreter.run_source(source)?;
    Ok(String::from_utf8_lossy(&interpreter.into_output()).into_owned())
}
