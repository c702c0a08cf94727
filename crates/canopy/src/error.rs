//! Error types for Canopy document handling

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Canopy operations.
///
/// The extraction core never fails: every transform degrades to omitted
/// fields or documented fallbacks. Errors only arise at the document-loading
/// edge, and even there the token resolver catches them and falls back.
#[derive(Error, Debug)]
pub enum CanopyError {
    /// A document could not be read from disk
    #[error("failed to read document {}: {source}", .path.display())]
    DocumentRead {
        /// Path of the unreadable document
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A document was not valid JSON
    #[error("failed to parse document {}: {source}", .path.display())]
    DocumentParse {
        /// Path of the malformed document
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
}

/// Result type alias for Canopy operations
pub type Result<T> = std::result::Result<T, CanopyError>;
