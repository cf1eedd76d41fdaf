//! CODEOWNERS Lint Core
//!
//! A library for linting the metadata blocks in Azure SDK CODEOWNERS files.
//!
//! # Features
//!
//! - **Parsing**: Classify lines and segment a CODEOWNERS file into blocks
//! - **Verification**: Check block formatting, owners, labels, and source
//!   path expressions against repository data
//! - **Baseline**: Filter a lint run through a set of accepted known errors
//!
//! # Quick Start
//!
//! ```no_run
//! use codeowners_lint_core::lint::{LinterContext, lint_file};
//! use codeowners_lint_core::providers::{OwnerSnapshot, RepoDirectory, RepoLabelSnapshot};
//! use codeowners_lint_core::load_file_as_lines;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let directory = RepoDirectory::new("/path/to/repo");
//! let owners = OwnerSnapshot::from_file("owners.json")?;
//! let labels = RepoLabelSnapshot::from_file("labels.json")?;
//! let ctx = LinterContext::new(&directory, &owners, &labels);
//!
//! let lines = load_file_as_lines("/path/to/repo/.github/CODEOWNERS")?;
//! let errors = lint_file(&ctx, &lines)?;
//! for error in &errors {
//!     eprintln!("{error}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Line classification and block segmentation
//! - [`lint`]: The verification engine and its error types
//! - [`providers`]: Repository, owner, and label lookup data

use std::io;
use std::path::{Path, PathBuf};

pub mod lint;
pub mod parse;
pub mod providers;

// Re-export commonly used types at the crate root
pub use lint::{
    BaseError, Baseline, BlockFormattingError, LinterContext, SingleLineError,
    UnknownMonikerError, lint_blocks, lint_file,
};
pub use parse::{Block, Moniker, blocks, find_block_end};

/// Loads a file as a list of lines, the shape all the lint entry points
/// consume. Line endings are stripped.
pub fn load_file_as_lines(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Finds the CODEOWNERS file by walking up from a start directory.
///
/// Starting from `start_dir` and ascending through its ancestors, each
/// directory is checked for (in order):
/// 1. `.github/CODEOWNERS`
/// 2. `CODEOWNERS`
/// 3. `docs/CODEOWNERS`
///
/// The upward walk means discovery works from anywhere inside a repository
/// checkout, not just its root. Returns `Some(path)` for the first match,
/// `None` if no ancestor has one.
pub fn find_codeowners_file(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        let locations = [
            dir.join(".github/CODEOWNERS"),
            dir.join("CODEOWNERS"),
            dir.join("docs/CODEOWNERS"),
        ];
        if let Some(found) = locations.into_iter().find(|p| p.is_file()) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn find_codeowners_prefers_github_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github")).unwrap();
        File::create(dir.path().join(".github/CODEOWNERS")).unwrap();
        File::create(dir.path().join("CODEOWNERS")).unwrap();

        let found = find_codeowners_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join(".github/CODEOWNERS"));
    }

    #[test]
    fn find_codeowners_falls_back_to_root() {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("CODEOWNERS")).unwrap();

        let found = find_codeowners_file(dir.path()).unwrap();
        assert_eq!(found, dir.path().join("CODEOWNERS"));
    }

    #[test]
    fn find_codeowners_walks_up_from_nested_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github")).unwrap();
        fs::create_dir_all(dir.path().join("sdk/storage")).unwrap();
        File::create(dir.path().join(".github/CODEOWNERS")).unwrap();

        let found = find_codeowners_file(&dir.path().join("sdk/storage")).unwrap();
        assert_eq!(found, dir.path().join(".github/CODEOWNERS"));
    }

    #[test]
    fn find_codeowners_nearest_ancestor_wins() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("nested/.github")).unwrap();
        File::create(dir.path().join("CODEOWNERS")).unwrap();
        File::create(dir.path().join("nested/.github/CODEOWNERS")).unwrap();

        let found = find_codeowners_file(&dir.path().join("nested")).unwrap();
        assert_eq!(found, dir.path().join("nested/.github/CODEOWNERS"));
    }

    #[test]
    fn find_codeowners_none_when_absent() {
        let dir = TempDir::new().unwrap();
        assert!(find_codeowners_file(dir.path()).is_none());
    }

    #[test]
    fn load_file_strips_line_endings() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CODEOWNERS");
        let mut file = File::create(&path).unwrap();
        write!(file, "/sdk/ @owner\r\n# comment\n").unwrap();

        let lines = load_file_as_lines(&path).unwrap();
        assert_eq!(lines, vec!["/sdk/ @owner".to_string(), "# comment".to_string()]);
    }
}
