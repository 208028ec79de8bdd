//! Error types for the ast-merge wrapper.
//!
//! Uses thiserror for derive macros. A compiler that runs and exits nonzero
//! is not an error here: its code is passed through by `exit_codes`.

use crate::exit_codes;
use std::io;
use thiserror::Error;

/// Failures of the wrapper itself.
#[derive(Error, Debug)]
pub enum MergeError {
    /// The compiler executable could not be spawned.
    #[error("failed to launch '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The pipe carrying the merged stdout/stderr could not be created.
    #[error("failed to create output pipe: {0}")]
    Pipe(#[source] io::Error),

    /// Reading compiler output or writing it to stdout failed.
    #[error("failed to relay compiler output: {0}")]
    Relay(#[source] io::Error),

    /// Waiting for the compiler to exit failed.
    #[error("failed to wait for compiler: {0}")]
    Wait(#[source] io::Error),
}

impl MergeError {
    /// Returns the exit code the wrapper reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            MergeError::Launch { .. }
            | MergeError::Pipe(_)
            | MergeError::Relay(_)
            | MergeError::Wait(_) => exit_codes::WRAPPER_FAILURE,
        }
    }
}

/// Result type alias for ast-merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;
