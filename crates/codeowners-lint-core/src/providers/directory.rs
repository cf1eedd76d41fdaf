//! Repository-backed implementation of [`DirectoryChecker`].

use super::DirectoryChecker;
use globset::GlobBuilder;
use log::{debug, trace};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Checks CODEOWNERS path expressions against a repository checkout.
///
/// The repository is listed once, lazily would save nothing since every lint
/// run checks many globs, so the listing happens in [`RepoDirectory::new`].
#[derive(Debug, Clone)]
pub struct RepoDirectory {
    root: PathBuf,
    /// Relative paths of every file and directory, forward-slash separated.
    entries: Vec<String>,
}

impl RepoDirectory {
    /// Creates a checker rooted at the repository checkout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let entries = Self::list_entries(&root);
        Self { root, entries }
    }

    /// Lists all files and directories in the repository, relative to the
    /// root. Directories are included because path expressions may name a
    /// directory that contains no files. The `.git` tree is skipped.
    fn list_entries(root: &Path) -> Vec<String> {
        debug!("Listing repository entries under {:?}", root);
        let mut entries = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || e.file_name() != ".git")
            .filter_map(|e| e.ok())
        {
            if entry.path() == root {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(root)
                && let Some(path_str) = relative.to_str()
            {
                entries.push(path_str.replace('\\', "/"));
            }
        }

        debug!("Found {} entries in repository", entries.len());
        entries
    }

    /// Normalizes a CODEOWNERS path expression into a globset pattern:
    /// the leading `/` is repo-root-relative, and a trailing `/` means
    /// everything under the directory.
    fn to_glob_pattern(path_expression: &str) -> String {
        let trimmed = path_expression.trim_start_matches('/');
        if trimmed.ends_with('/') {
            format!("{trimmed}**")
        } else {
            trimmed.to_string()
        }
    }
}

impl DirectoryChecker for RepoDirectory {
    fn glob_has_matches(&self, path_expression: &str) -> bool {
        let pattern = Self::to_glob_pattern(path_expression);
        trace!("Matching glob {:?} as {:?}", path_expression, pattern);
        let Ok(glob) = GlobBuilder::new(&pattern).literal_separator(true).build() else {
            debug!("Glob {:?} failed to compile", pattern);
            return false;
        };
        let matcher = glob.compile_matcher();
        self.entries.iter().any(|entry| matcher.is_match(entry))
    }

    fn path_exists(&self, path: &str) -> bool {
        let relative = path.trim_start_matches('/');
        fs::metadata(self.root.join(relative)).is_ok()
    }
}
