//! Junk classification and concurrent pruning.
//!
//! This module provides:
//! - The static junk rule table and per-entry classifier
//! - Single-pass enumeration of the prune root
//! - Idempotent removal and the concurrent worker pool that drives it

mod classifier;
mod entry;
mod enumerator;
mod orchestrator;
mod remover;
mod results;
pub mod rules;

pub use classifier::{Classifier, MatchRule, Verdict};
pub use entry::Entry;
pub use enumerator::enumerate;
pub use orchestrator::{
    validate_root, PruneOptions, PruneReport, Pruner, DEFAULT_CONCURRENCY,
};
pub use remover::remove;
pub use results::ResultSet;
pub use rules::JunkRules;
