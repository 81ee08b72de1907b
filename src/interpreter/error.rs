use std::io;
use thiserror::Error;

/// A runtime fault raised while executing a statement.
///
/// Faults are ordinary values: `try` inspects them, everything else
/// propagates them with `?`.
#[derive(Debug, Error)]
pub enum Fault {
    #[error("text slice {start}..{end} is out of range in `{statement}`")]
    SliceOutOfRange {
        statement: String,
        start: usize,
        end: usize,
    },

    #[error("failed to read input: {0}")]
    Input(#[source] io::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl Fault {
    pub fn slice_out_of_range(statement: impl Into<String>, start: usize, end: usize) -> Self {
        Self::SliceOutOfRange {
            statement: statement.into(),
            start,
            end,
        }
    }
}

/// Why a whole script stopped early.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("{fault} (line {line})")]
    Fault {
        line: usize,
        #[source]
        fault: Fault,
    },

    #[error("failed to read script: {0}")]
    Read(#[source] io::Error),

    #[error("failed to flush output: {0}")]
    Flush(#[source] io::Error),
}

impl ScriptError {
    /// The 1-based script line that faulted, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Fault { line, .. } => Some(*line),
            Self::Read(_) | Self::Flush(_) => None,
        }
    }
}
