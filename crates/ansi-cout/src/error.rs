//! Emitter errors with structured context.

use std::io;

use serde_json::{json, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("Failed to write {operation} sequence: {source}")]
    Write {
        operation: &'static str,
        #[source]
        source: io::Error,
    },
    #[error("Failed to flush output: {0}")]
    Flush(#[source] io::Error),
}

impl EmitError {
    /// The emitter operation that failed, e.g. `"cursor_up"` or `"flush"`.
    pub fn operation(&self) -> &'static str {
        match self {
            EmitError::Write { operation, .. } => operation,
            EmitError::Flush(_) => "flush",
        }
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            EmitError::Write { source, .. } | EmitError::Flush(source) => source,
        }
    }

    pub fn reason(&self) -> String {
        self.io_error().to_string()
    }

    /// Returns structured context about the error for debugging.
    pub fn context(&self) -> Value {
        json!({
            "operation": self.operation(),
            "kind": format!("{:?}", self.io_error().kind()),
            "reason": self.reason()
        })
    }

    /// Returns whether this error is potentially transient and may succeed on retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.io_error().kind(),
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock
        )
    }

    /// Returns a helpful suggestion for resolving the error.
    pub fn suggestion(&self) -> String {
        match self.io_error().kind() {
            io::ErrorKind::BrokenPipe => {
                "The output was closed by the reader. Check that the receiving process is still running."
                    .to_string()
            }
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock => {
                "The write was interrupted. Retrying the same call may succeed.".to_string()
            }
            _ => "Check that the output stream is writable, or set ANSI_COUT_ON_WRITE_FAILURE=ignore."
                .to_string(),
        }
    }
}
