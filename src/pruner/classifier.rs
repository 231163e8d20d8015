//! Per-entry junk classification.

use std::fmt;
use std::path::PathBuf;

use super::entry::Entry;
use super::results::ResultSet;
use super::rules::JunkRules;

/// Which rule matched an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    DirName,
    FileName,
    Extension,
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchRule::DirName => write!(f, "dir"),
            MatchRule::FileName => write!(f, "file"),
            MatchRule::Extension => write!(f, "ext"),
        }
    }
}

/// Outcome of classifying one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Remove { path: PathBuf, rule: MatchRule },
    Skip,
}

/// Decides whether an entry is junk, given what has already been claimed.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: JunkRules,
}

impl Classifier {
    pub fn new(rules: JunkRules) -> Self {
        Self { rules }
    }

    /// Classify `entry`.
    ///
    /// Rules are tried in order: directory name, file name, extension. The
    /// first match wins. An entry whose path, or any ancestor directory, is
    /// already in `claimed` is skipped: it went away with that removal.
    ///
    /// Names that are not valid UTF-8 are matched in their lossy form, so
    /// `notes\xff.md` still has the `.md` extension.
    pub fn classify(&self, entry: &Entry, claimed: &ResultSet) -> Verdict {
        let name = entry.name_lossy();
        let name = name.as_ref();

        if self.rules.is_kept(name) {
            return Verdict::Skip;
        }

        let rule = if self.rules.is_junk_dir(name) {
            MatchRule::DirName
        } else if self.rules.is_junk_file(name) {
            MatchRule::FileName
        } else if self.rules.is_junk_extension(name) {
            MatchRule::Extension
        } else {
            return Verdict::Skip;
        };

        let path = entry.full_path();
        if claimed.covers(&path) {
            return Verdict::Skip;
        }

        Verdict::Remove { path, rule }
    }
}
