//! Forced, idempotent removal of files and directory trees.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PrunerError, Result};

/// Remove `path` recursively.
///
/// A path that does not exist is not an error, so repeated or racing
/// removals of the same path succeed. Symbolic links are removed, never
/// followed. Any other I/O failure is returned.
pub fn remove(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::trace!(path = %path.display(), "Already gone");
            return Ok(());
        }
        Err(e) => return Err(PrunerError::from_io(path, e)),
    };

    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(PrunerError::from_io(path, e)),
    }
}
