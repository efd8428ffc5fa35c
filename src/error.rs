//! Errors raised by the file-level pipeline.
//!
//! The rewrite itself never fails: unexpected shapes are interpolated as-is.
//! Only configuration parsing and the parse/print steps around the pass can
//! produce an [`Error`].

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Plugin options were not valid JSON for [`crate::TransformConfig`].
    #[error("invalid transform config: {0}")]
    Config(#[from] serde_json::Error),

    /// The source file could not be parsed.
    #[error("failed to parse {file_name} at {line}:{column}: {message}")]
    Parse {
        file_name: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// Writing the transformed module back to text failed.
    #[error("failed to emit transformed module: {0}")]
    Emit(#[from] std::io::Error),

    /// The emitter produced bytes that are not UTF-8.
    #[error("emitted code is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
