use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Ordered, append-only record of the paths claimed for removal in one run.
///
/// Each path is stored at most once. Insertion order is the order in which
/// workers claimed the paths.
#[derive(Debug, Default, Clone)]
pub struct ResultSet {
    ordered: Vec<PathBuf>,
    index: HashSet<PathBuf>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path`. Returns `false` if it was already present.
    pub fn push(&mut self, path: PathBuf) -> bool {
        if self.index.contains(&path) {
            return false;
        }
        self.index.insert(path.clone());
        self.ordered.push(path);
        true
    }

    /// True when `path` or any of its ancestors is present.
    pub fn covers(&self, path: &Path) -> bool {
        path.ancestors().any(|p| self.index.contains(p))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.ordered
    }
}
