//! Orchestrator for concurrent pruning.

use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::error::{PrunerError, Result};

use super::classifier::{Classifier, Verdict};
use super::entry::Entry;
use super::enumerator::enumerate;
use super::remover::remove;
use super::results::ResultSet;
use super::rules::JunkRules;

/// Default number of concurrent workers.
pub const DEFAULT_CONCURRENCY: usize = 100;

/// Options for a prune run.
#[derive(Debug, Clone)]
pub struct PruneOptions {
    /// Number of concurrent workers.
    pub concurrency: usize,
    /// If true, classify and report but don't delete anything.
    pub dry_run: bool,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            dry_run: false,
        }
    }
}

/// Outcome of a successful prune run.
#[derive(Debug, Clone)]
pub struct PruneReport {
    /// Absolute root that was pruned.
    pub root: PathBuf,
    /// Removed paths in the order they were claimed.
    pub removed: Vec<PathBuf>,
    pub dry_run: bool,
    pub elapsed: Duration,
}

impl PruneReport {
    pub fn count(&self) -> usize {
        self.removed.len()
    }
}

/// Removal function used by workers.
type RemoveFn = fn(&Path) -> Result<()>;

/// Validate that `path` is an existing directory and make it absolute.
///
/// Relative paths are resolved against the working directory and `.`/`..`
/// are folded lexically. Symbolic links are kept as given.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(PrunerError::InvalidPath("path is empty".to_string()));
    }

    let absolute = std::path::absolute(path).map_err(|e| PrunerError::from_io(path, e))?;
    let root = normalize(&absolute);

    let metadata = std::fs::metadata(&root).map_err(|e| PrunerError::from_io(&root, e))?;
    if !metadata.is_dir() {
        return Err(PrunerError::InvalidPath(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    Ok(root)
}

/// Fold `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

/// Cursor and result list, claimed together under one lock.
struct WorkQueue {
    cursor: std::vec::IntoIter<Entry>,
    claimed: ResultSet,
}

/// State shared by all workers of one run.
struct SharedState<'a> {
    classifier: &'a Classifier,
    queue: Mutex<WorkQueue>,
    aborted: AtomicBool,
    failure: Mutex<Option<PrunerError>>,
    remover: RemoveFn,
    dry_run: bool,
}

impl SharedState<'_> {
    fn queue(&self) -> MutexGuard<'_, WorkQueue> {
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Pull entries until one is classified for removal, and record it.
    ///
    /// Returns `None` once the cursor is exhausted.
    fn claim_next(&self) -> Option<PathBuf> {
        let mut queue = self.queue();
        while let Some(entry) = queue.cursor.next() {
            if let Verdict::Remove { path, rule } = self.classifier.classify(&entry, &queue.claimed)
            {
                tracing::debug!(path = %path.display(), %rule, "Claimed");
                queue.claimed.push(path.clone());
                return Some(path);
            }
        }
        None
    }

    /// Record the first failure and tell every worker to stop.
    fn fail(&self, err: PrunerError) {
        let mut slot = self.failure.lock().unwrap_or_else(|e| e.into_inner());
        if slot.is_none() {
            tracing::error!(error = %err, "Aborting prune");
            *slot = Some(err);
        }
        self.aborted.store(true, Ordering::SeqCst);
    }

    fn worker(&self, id: usize) {
        let mut handled = 0usize;
        while !self.aborted.load(Ordering::SeqCst) {
            let Some(path) = self.claim_next() else {
                break;
            };

            if !self.dry_run {
                if let Err(e) = (self.remover)(&path) {
                    self.fail(e);
                    break;
                }
            }
            handled += 1;
        }
        tracing::trace!(worker = id, handled, "Worker finished");
    }
}

/// Prunes junk from a directory tree with a fixed pool of workers.
pub struct Pruner {
    classifier: Classifier,
    options: PruneOptions,
    remover: RemoveFn,
}

impl Pruner {
    /// Create a new pruner.
    pub fn new(rules: JunkRules, options: PruneOptions) -> Self {
        Self {
            classifier: Classifier::new(rules),
            options,
            remover: remove,
        }
    }

    #[cfg(test)]
    fn with_remover(mut self, remover: RemoveFn) -> Self {
        self.remover = remover;
        self
    }

    /// Prune `root`.
    ///
    /// The root is validated and enumerated once, then `concurrency` workers
    /// drain a shared cursor over the entries. The first removal error stops
    /// all workers and is returned; deletions already done are kept.
    pub fn prune(&self, root: &Path) -> Result<PruneReport> {
        let started = Instant::now();

        if self.options.concurrency == 0 {
            return Err(PrunerError::InvalidConcurrency(0));
        }

        let root = validate_root(root)?;
        tracing::info!(root = %root.display(), concurrency = self.options.concurrency, "Pruning");

        let entries = enumerate(&root)?;
        let workers = self.options.concurrency.min(entries.len()).max(1);

        let state = SharedState {
            classifier: &self.classifier,
            queue: Mutex::new(WorkQueue {
                cursor: entries.into_iter(),
                claimed: ResultSet::new(),
            }),
            aborted: AtomicBool::new(false),
            failure: Mutex::new(None),
            remover: self.remover,
            dry_run: self.options.dry_run,
        };

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("prune-worker-{}", i))
            .build()?;

        pool.scope(|s| {
            for id in 0..workers {
                let state = &state;
                s.spawn(move |_| state.worker(id));
            }
        });

        let SharedState { queue, failure, .. } = state;
        if let Some(err) = failure.into_inner().unwrap_or_else(|e| e.into_inner()) {
            return Err(err);
        }

        let removed = queue
            .into_inner()
            .unwrap_or_else(|e| e.into_inner())
            .claimed
            .into_vec();

        let elapsed = started.elapsed();
        tracing::info!(count = removed.len(), ?elapsed, "Prune finished");

        Ok(PruneReport {
            root,
            removed,
            dry_run: self.options.dry_run,
            elapsed,
        })
    }
}
