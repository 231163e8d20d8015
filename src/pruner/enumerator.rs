//! Single-pass recursive listing of the prune root.

use std::path::Path;
use walkdir::WalkDir;

use crate::error::{PrunerError, Result};

use super::entry::Entry;

/// List every object beneath `root` (the root itself excluded).
///
/// The walk is pre-order: a directory is always yielded before anything it
/// contains, and siblings come in file name order. Symbolic links are listed
/// but never followed. Any error while walking fails the whole enumeration.
pub fn enumerate(root: &Path) -> Result<Vec<Entry>> {
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    let mut entries = Vec::new();
    for result in walker {
        let dirent = result?;
        match Entry::from_path(dirent.path()) {
            Some(entry) => entries.push(entry),
            None => {
                return Err(PrunerError::InvalidPath(
                    dirent.path().display().to_string(),
                ))
            }
        }
    }

    tracing::debug!(root = %root.display(), count = entries.len(), "Enumerated entries");
    Ok(entries)
}
