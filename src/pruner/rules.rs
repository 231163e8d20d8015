//! Static classification table of junk directory names, file names and
//! extensions found in published npm packages.

use std::collections::HashSet;

/// Directory names that are never needed at runtime.
pub const JUNK_DIRS: &[&str] = &[
    "__mocks__",
    "__tests__",
    ".circleci",
    ".github",
    ".idea",
    ".nyc_output",
    ".vscode",
    "coverage",
    "docs",
    "example",
    "examples",
    "images",
    "logos",
    "node-gyp",
    "powered-test",
    "test",
    "tests",
    "website",
];

/// File names that are never needed at runtime.
pub const JUNK_FILES: &[&str] = &[
    "_config.yml",
    ".appveyor.yml",
    ".babelrc",
    ".coveralls.yml",
    ".documentup.json",
    ".DS_Store",
    ".editorconfig",
    ".eslintignore",
    ".eslintrc.js",
    ".eslintrc.json",
    ".eslintrc.yml",
    ".eslintrc",
    ".flowconfig",
    ".gitattributes",
    ".gitlab-ci.yml",
    ".gitmodules",
    ".htmllintrc",
    ".jshintrc",
    ".lint",
    ".npmignore",
    ".npmrc",
    ".prettierrc.js",
    ".prettierrc.json",
    ".prettierrc.toml",
    ".prettierrc.yml",
    ".prettierrc",
    ".stylelintrc.js",
    ".stylelintrc.json",
    ".stylelintrc.yaml",
    ".stylelintrc.yml",
    ".stylelintrc",
    ".tern-project",
    ".travis.yml",
    ".yarn-integrity",
    ".yarn-metadata.json",
    ".yarnclean",
    ".yo-rc.json",
    "appveyor.yml",
    "AUTHORS",
    "biome.json",
    "changelog",
    "CHANGELOG",
    "CHANGES",
    "circle.yml",
    "CONTRIBUTORS",
    "eslint",
    "Gruntfile.js",
    "gulpfile.js",
    "Gulpfile.js",
    "htmllint.js",
    "Jenkinsfile",
    "jest.config.js",
    "karma.conf.js",
    "LICENCE-MIT",
    "LICENCE.BSD",
    "LICENCE.txt",
    "licence",
    "LICENCE",
    "LICENSE-jsbn",
    "LICENSE-MIT",
    "LICENSE.BSD",
    "LICENSE.txt",
    "license",
    "LICENSE",
    "Makefile",
    "prettier.config.js",
    "README",
    "stylelint.config.js",
    "thumbs.db",
    "tsconfig.json",
    "tslint.json",
    "wallaby.conf.js",
    "wallaby.js",
];

/// Extensions (with the leading dot) that are never needed at runtime.
pub const JUNK_EXTENSIONS: &[&str] = &[
    ".coffee",
    ".jst",
    ".markdown",
    ".md",
    ".mkd",
    ".swp",
    ".tgz",
    ".ts",
    ".log",
];

/// Immutable set of junk names used by the classifier.
///
/// Lookups are exact and case-sensitive. Names listed in `keep` are never
/// reported as junk, whichever rule would match them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunkRules {
    dirs: HashSet<String>,
    files: HashSet<String>,
    extensions: HashSet<String>,
    keep: HashSet<String>,
}

impl JunkRules {
    /// The built-in rule table.
    pub fn builtin() -> Self {
        Self {
            dirs: to_set(JUNK_DIRS),
            files: to_set(JUNK_FILES),
            extensions: to_set(JUNK_EXTENSIONS),
            keep: HashSet::new(),
        }
    }

    /// An empty rule table that matches nothing.
    pub fn empty() -> Self {
        Self {
            dirs: HashSet::new(),
            files: HashSet::new(),
            extensions: HashSet::new(),
            keep: HashSet::new(),
        }
    }

    /// Add directory names.
    pub fn with_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add file names.
    pub fn with_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add extensions. A missing leading dot is added.
    pub fn with_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(exts.into_iter().map(|ext| {
            let ext = ext.into();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        }));
        self
    }

    /// Protect names from every rule.
    pub fn with_keep<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_junk_dir(&self, name: &str) -> bool {
        self.dirs.contains(name)
    }

    pub fn is_junk_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Check the extension of `name` (not the name itself).
    pub fn is_junk_extension(&self, name: &str) -> bool {
        extension_of(name).is_some_and(|ext| self.extensions.contains(ext))
    }

    pub fn is_kept(&self, name: &str) -> bool {
        self.keep.contains(name)
    }
}

impl Default for JunkRules {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Extension of a file name including the leading dot.
///
/// Dotfiles such as `.md` have no extension, matching `Path::extension`.
pub fn extension_of(name: &str) -> Option<&str> {
    match name.rfind('.') {
        Some(0) | None => None,
        Some(idx) => Some(&name[idx..]),
    }
}

fn to_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
