//! The district boundary geometry, served to the dashboard unchanged.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{DataError, DataResult};

/// Reads the boundary file as raw bytes.
///
/// # Errors
///
/// [`DataError::NotFound`] if the file does not exist,
/// [`DataError::Unavailable`] if it exists but cannot be read.
pub async fn read_boundary(path: &Path) -> DataResult<Vec<u8>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(DataError::NotFound(format!(
            "map file not found: {}",
            path.display()
        ))),
        Err(e) => Err(DataError::Unavailable(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}
