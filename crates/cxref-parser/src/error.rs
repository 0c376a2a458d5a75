//! Parser error types for cxref-parser.

use std::path::PathBuf;

/// Errors that can occur while constructing a [`SourceUnit`](crate::SourceUnit).
///
/// "Symbol not found" is never an error: every resolver returns an empty
/// result instead.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Not a C source or header file: {}", .0.display())]
    UnsupportedFile(PathBuf),

    #[error("Could not detect the character encoding of {}", .0.display())]
    UndetectableEncoding(PathBuf),

    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
