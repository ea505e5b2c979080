//! Error types for document assembly.

use thiserror::Error;

/// Errors that can surface while assembling a document.
///
/// Missing pages are not errors (they are skipped); only page store faults
/// and I/O problems reach the caller.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("page store error: {0}")]
    PageStore(String),
}

pub type Result<T> = std::result::Result<T, Error>;
