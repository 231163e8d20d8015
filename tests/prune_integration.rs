//! Integration tests for the pruning engine.

use node_pruner::pruner::{JunkRules, PruneOptions, PruneReport, Pruner};
use node_pruner::PrunerError;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn pruner(concurrency: usize) -> Pruner {
    Pruner::new(
        JunkRules::builtin(),
        PruneOptions {
            concurrency,
            dry_run: false,
        },
    )
}

fn relative(report: &PruneReport) -> HashSet<PathBuf> {
    report
        .removed
        .iter()
        .map(|p| p.strip_prefix(&report.root).unwrap().to_path_buf())
        .collect()
}

fn set(paths: &[&str]) -> HashSet<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

/// A node_modules-like tree with several packages.
fn create_node_modules() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    // Plain package
    let lodash = root.join("lodash");
    fs::create_dir_all(lodash.join("fp")).unwrap();
    fs::write(lodash.join("package.json"), r#"{"name": "lodash"}"#).unwrap();
    fs::write(lodash.join("index.js"), "module.exports = {}").unwrap();
    fs::write(lodash.join("fp/map.js"), "").unwrap();
    fs::write(lodash.join("LICENSE"), "MIT").unwrap();
    fs::write(lodash.join("README.md"), "# lodash").unwrap();
    fs::write(lodash.join("CHANGELOG"), "1.0.0").unwrap();

    // Package with junk dirs holding junk of their own
    let chalk = root.join("chalk");
    fs::create_dir_all(chalk.join("test/fixtures/docs")).unwrap();
    fs::create_dir_all(chalk.join(".github/workflows")).unwrap();
    fs::create_dir_all(chalk.join("source")).unwrap();
    fs::write(chalk.join("source/index.js"), "").unwrap();
    fs::write(chalk.join("source/index.d.ts"), "").unwrap();
    fs::write(chalk.join("test/README.md"), "").unwrap();
    fs::write(chalk.join("test/fixtures/LICENSE"), "").unwrap();
    fs::write(chalk.join("test/fixtures/docs/a.md"), "").unwrap();
    fs::write(chalk.join(".github/workflows/ci.yml"), "").unwrap();
    fs::write(chalk.join(".npmignore"), "").unwrap();

    // Scoped package
    let scoped = root.join("@babel/core");
    fs::create_dir_all(scoped.join("lib")).unwrap();
    fs::write(scoped.join("lib/index.js"), "").unwrap();
    fs::write(scoped.join("lib/index.js.log"), "").unwrap();
    fs::write(scoped.join(".babelrc"), "{}").unwrap();

    tmp
}

fn expected_removed() -> HashSet<PathBuf> {
    set(&[
        "lodash/LICENSE",
        "lodash/README.md",
        "lodash/CHANGELOG",
        "chalk/test",
        "chalk/.github",
        "chalk/source/index.d.ts",
        "chalk/.npmignore",
        "@babel/core/lib/index.js.log",
        "@babel/core/.babelrc",
    ])
}

#[test]
fn test_prune_node_modules() {
    let tmp = create_node_modules();
    let report = pruner(100).prune(tmp.path()).unwrap();

    assert_eq!(relative(&report), expected_removed());
    assert_eq!(report.count(), expected_removed().len());

    for path in &report.removed {
        assert!(!path.exists(), "{} still exists", path.display());
    }

    // Runtime files remain
    assert!(tmp.path().join("lodash/index.js").exists());
    assert!(tmp.path().join("lodash/package.json").exists());
    assert!(tmp.path().join("lodash/fp/map.js").exists());
    assert!(tmp.path().join("chalk/source/index.js").exists());
    assert!(tmp.path().join("@babel/core/lib/index.js").exists());
}

#[test]
fn test_single_package_scenario() {
    let tmp = TempDir::new().unwrap();
    let pkg = tmp.path().join("pkg");
    fs::create_dir_all(pkg.join("test")).unwrap();
    fs::write(pkg.join("test/spec.js"), "").unwrap();
    fs::write(pkg.join("README.md"), "").unwrap();
    fs::write(pkg.join("index.js"), "").unwrap();
    fs::write(pkg.join("lib.coffee"), "").unwrap();

    let report = pruner(100).prune(tmp.path()).unwrap();

    assert_eq!(
        relative(&report),
        set(&["pkg/test", "pkg/README.md", "pkg/lib.coffee"])
    );
    assert!(pkg.join("index.js").exists());
}

#[test]
fn test_file_inside_removed_dir_is_not_listed() {
    let tmp = TempDir::new().unwrap();
    let test_dir = tmp.path().join("a/b/test");
    fs::create_dir_all(&test_dir).unwrap();
    fs::write(test_dir.join("README"), "").unwrap();

    let report = pruner(4).prune(tmp.path()).unwrap();

    assert_eq!(relative(&report), set(&["a/b/test"]));
}

#[test]
fn test_concurrency_invariance() {
    let mut sets = Vec::new();
    for concurrency in [1, 2, 7, 100] {
        let tmp = create_node_modules();
        let report = pruner(concurrency).prune(tmp.path()).unwrap();
        sets.push(relative(&report));
    }

    for s in &sets {
        assert_eq!(s, &expected_removed());
    }
}

#[test]
fn test_no_duplicates() {
    let tmp = create_node_modules();
    let report = pruner(100).prune(tmp.path()).unwrap();

    let unique: HashSet<&PathBuf> = report.removed.iter().collect();
    assert_eq!(unique.len(), report.removed.len());
}

#[test]
fn test_idempotent_second_run() {
    let tmp = create_node_modules();

    let first = pruner(10).prune(tmp.path()).unwrap();
    let second = pruner(10).prune(tmp.path()).unwrap();

    assert_eq!(first.count(), expected_removed().len());
    assert_eq!(second.count(), 0);
}

#[test]
fn test_relative_root_is_resolved() {
    let tmp = create_node_modules();
    let cwd = std::env::current_dir().unwrap();
    let rel = pathdiff(tmp.path(), &cwd);

    let report = pruner(10).prune(&rel).unwrap();
    assert!(report.root.is_absolute());
    assert_eq!(report.root, tmp.path());
}

#[test]
fn test_nonexistent_root_deletes_nothing() {
    let result = pruner(10).prune(Path::new("/nonexistent/node_modules/12345"));
    assert!(matches!(result, Err(PrunerError::PathNotFound(_))));
}

#[test]
fn test_custom_rules() {
    let tmp = create_node_modules();
    let rules = JunkRules::empty().with_dirs(["fp"]).with_extensions(["json"]);
    let pruner = Pruner::new(rules, PruneOptions::default());

    let report = pruner.prune(tmp.path()).unwrap();

    assert_eq!(relative(&report), set(&["lodash/fp", "lodash/package.json"]));
}

/// Relative path from `base` to `path` through the filesystem root.
fn pathdiff(path: &Path, base: &Path) -> PathBuf {
    let mut rel = PathBuf::new();
    for _ in base.components().skip(1) {
        rel.push("..");
    }
    rel.join(path.strip_prefix("/").unwrap())
}
