//! Errors raised while loading the case table or the boundary file.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    /// The backing file is missing or could not be read.
    #[error("{0}")]
    Unavailable(String),

    /// The file was read but its contents do not have the expected shape.
    #[error("{0}")]
    Malformed(String),

    /// A static file served verbatim does not exist.
    #[error("{0}")]
    NotFound(String),
}

pub type DataResult<T> = Result<T, DataError>;
