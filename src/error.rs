//! Error types for blogroll-opml
//!
//! Each pipeline stage has its own `thiserror` enum. None of them are retried
//! or recovered from inside the library; they bubble up to the caller, which
//! decides how to present them.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for blogroll operations
#[derive(Error, Debug)]
pub enum Error {
    /// Fetching the source page failed
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// The fetched page could not be scanned for links
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Writing the OPML file failed
    #[error("File write error: {0}")]
    FileWrite(#[from] FileWriteError),
}

/// Network-side errors raised while fetching the page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input is not an absolute URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// Connection, DNS, TLS or protocol failure
    #[error("Request to {url} failed: {message}")]
    RequestFailed {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },

    /// The configured timeout elapsed
    #[error("Request to {url} timed out after {timeout_ms}ms")]
    Timeout {
        /// Requested URL
        url: String,
        /// Configured timeout in milliseconds
        timeout_ms: u64,
    },

    /// The response body could not be read or decoded
    #[error("Failed to read body from {url}: {message}")]
    BodyReadFailed {
        /// Requested URL
        url: String,
        /// Underlying error message
        message: String,
    },
}

/// Errors raised while scanning the document for anchors
#[derive(Error, Debug)]
pub enum ParseError {
    /// The anchor selector did not compile
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Errors raised while persisting the OPML document
#[derive(Error, Debug)]
pub enum FileWriteError {
    /// Writing the temporary file failed
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFailed {
        /// Path being written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Moving the temporary file into place failed
    #[error("Failed to move output into {}: {source}", .path.display())]
    PersistFailed {
        /// Final destination
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for blogroll operations
pub type Result<T> = std::result::Result<T, Error>;
