//! Errors raised by the command line driver.
//!
//! Lexical errors in the input are not errors here: they are reported as
//! diagnostics. These are failures to read input or write output.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8 (invalid byte at offset {offset})")]
    InvalidUtf8 { path: String, offset: usize },

    #[error("cannot write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Read { .. } | CliError::InvalidUtf8 { .. } => 2,
            CliError::Write(_) | CliError::Serialize(_) => 3,
        }
    }
}
