use std::borrow::Cow;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// One filesystem object discovered during enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Base name of the object.
    pub name: OsString,
    /// Directory containing the object.
    pub parent_path: PathBuf,
}

impl Entry {
    pub fn new(name: impl Into<OsString>, parent_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            parent_path: parent_path.into(),
        }
    }

    /// Build an entry from a full path. Returns `None` for paths without a
    /// final component (such as `/` or `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?;
        let parent = path.parent()?;
        Some(Self::new(name, parent))
    }

    /// The name as UTF-8, with invalid sequences replaced by U+FFFD.
    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    /// `parent_path` joined with `name`.
    pub fn full_path(&self) -> PathBuf {
        self.parent_path.join(&self.name)
    }
}
