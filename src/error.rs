//! Error types for mdx2html.
//!
//! The rendering core itself never fails: malformed Markdown degrades to
//! literal paragraph text and a missing frontmatter header is valid input.
//! Errors only arise on the file-reading convenience surface.

use thiserror::Error;

/// Result type for mdx2html operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur outside the pure rendering core.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
