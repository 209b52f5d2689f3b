use std::io;

use thiserror::Error;

/// Failure of a sink operation.
///
/// Formatting itself cannot fail; only delivering the bytes can.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The destination stream rejected the bytes.
    #[error("failed to write formatted output: {0}")]
    Io(#[from] io::Error),
}
