//! Write failures raised by the output shim.

use thiserror::Error;

/// An error writing a rendered line to one of the shim's streams.
#[derive(Debug, Error)]
pub enum ShimError {
    /// The primary output stream rejected the write.
    #[error("failed to write to output stream: {0}")]
    Output(#[source] std::io::Error),

    /// The diagnostic mirror stream rejected the write.
    #[error("failed to write to diagnostic stream: {0}")]
    Diagnostic(#[source] std::io::Error),
}

impl ShimError {
    /// Get the underlying I/O error.
    pub fn io_error(&self) -> &std::io::Error {
        match self {
            ShimError::Output(err) => err,
            ShimError::Diagnostic(err) => err,
        }
    }
}
