//! Error types for presentation text search.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while searching presentation files.
///
/// Only [`Error::InvalidPattern`] is fatal to a whole invocation. Every
/// other variant is scoped to a single file or a single slide and is
/// reported as a warning by the caller.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read an input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be opened as a ZIP container.
    #[error("Not a ZIP archive: {0}")]
    NotAnArchive(String),

    /// A slide entry exists but could not be decompressed or read fully.
    #[error("Failed to read slide {slide}: {reason}")]
    SlideRead { slide: usize, reason: String },

    /// The search pattern failed to compile as a regular expression.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
