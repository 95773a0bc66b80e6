//! Error types for the dll2lib pipeline.
//!
//! Every failure in the pipeline is terminal, so a single enum covers
//! usage problems, external tool failures and malformed dump output.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code reported for every failed run.
pub const FAILURE_EXIT_CODE: i32 = -1;

/// Main error type for dll2lib operations.
#[derive(Debug, Error)]
pub enum Dll2LibError {
    /// Input library does not exist
    #[error("Could not find input file {}", .0.display())]
    InputNotFound(PathBuf),

    /// External tool could not be started
    #[error("{tool} could not be started: {source}")]
    ToolSpawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// External tool exited with a non-zero status
    #[error("{tool} failed with exit code {code}")]
    ToolFailed { tool: String, code: i32 },

    /// External tool was terminated before reporting an exit code
    #[error("{tool} was terminated without an exit code")]
    ToolTerminated { tool: String },

    /// Dump output did not match the expected layout
    #[error("Invalid dump data at line {line}: expected {expected}")]
    DumpFormat { line: usize, expected: String },

    /// Dump output ended before the expected content
    #[error("Invalid dump data: file ended before {expected}")]
    UnexpectedEof { expected: String },

    /// Config file could not be read or decoded
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Dll2LibError {
    /// Errors caused by how the tool was invoked; the CLI prints usage for these.
    pub fn is_usage(&self) -> bool {
        matches!(self, Dll2LibError::InputNotFound(_))
    }

    pub(crate) fn dump_format(line: usize, expected: impl Into<String>) -> Self {
        Dll2LibError::DumpFormat {
            line,
            expected: expected.into(),
        }
    }

    pub(crate) fn eof(expected: impl Into<String>) -> Self {
        Dll2LibError::UnexpectedEof {
            expected: expected.into(),
        }
    }
}

/// Result type alias for dll2lib operations
pub type Result<T> = std::result::Result<T, Dll2LibError>;
