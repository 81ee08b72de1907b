use std::io::{BufRead, Write};

use tracing::{debug, trace};

use super::dispatcher::Interpreter;
use super::error::Fault;

/// The bare word that reads a line from the interpreter's input.
pub const INPUT_KEYWORD: &str = "input";

/// Render an array as `[a, b, c]`; an empty array renders as `[]`.
pub fn render_array(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// Inner text of `text` if it is wrapped in a matched pair of `quote`.
pub fn strip_quotes(text: &str, quote: char) -> Option<&str> {
    let quote_len = quote.len_utf8();
    if text.len() >= 2 * quote_len && text.starts_with(quote) && text.ends_with(quote) {
        Some(&text[quote_len..text.len() - quote_len])
    } else {
        None
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Resolve every whitespace-separated token of `expression` and glue the
    /// results together with no separator.
    pub fn evaluate(&mut self, expression: &str) -> Result<String, Fault> {
        let mut result = String::new();

        for token in expression.split_whitespace() {
            if let Some(literal) = strip_quotes(token, '\'') {
                result.push_str(literal);
            } else if let Some(value) = self.env.get(token) {
                result.push_str(value);
            } else if let Some(items) = self.env.get_array(token) {
                result.push_str(&render_array(items));
            } else if token == INPUT_KEYWORD {
                let line = self.read_input_line()?;
                result.push_str(&line);
            } else {
                result.push_str(token);
            }
            trace!(token, so_far = %result, "resolved token");
        }

        Ok(result)
    }

    fn read_input_line(&mut self) -> Result<String, Fault> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(Fault::Input)?;
        if read == 0 {
            debug!("input exhausted, reading empty line");
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
