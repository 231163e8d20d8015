//! Node Pruner - removes unused files from node_modules
//!
//! This crate provides functionality for:
//! - Classifying dependency-tree entries against a fixed junk rule table
//! - Deleting matches with a bounded pool of concurrent workers
//! - Reporting what was removed

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod pruner;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, PrunerError};
pub use pruner::{JunkRules, PruneOptions, PruneReport, Pruner};
