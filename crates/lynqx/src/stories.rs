//! Loading user stories from disk.

use lynqx_error::{IoError, LynqxResult};
use std::path::Path;
use tracing::{debug, instrument};

/// Read a user story file, one story per line.
///
/// # Errors
///
/// `IoError` if the file cannot be read.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn read_stories(path: &Path) -> LynqxResult<String> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        IoError::new(format!(
            "Failed to read user stories from {}: {}",
            path.display(),
            e
        ))
    })?;
    debug!(bytes = text.len(), "Loaded user stories");
    Ok(text)
}
