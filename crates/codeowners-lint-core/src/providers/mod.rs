//! Read-only lookup data consumed by verification.
//!
//! The linter never talks to GitHub directly; it reads snapshots of team,
//! user, and label data prepared ahead of time, plus the local repository
//! tree. Each concern is a trait so tests can substitute small in-memory
//! fixtures.

mod directory;
mod snapshot;

pub use directory::RepoDirectory;
pub use snapshot::{OwnerSnapshot, RepoLabelSnapshot, SnapshotError};

/// Answers existence questions about the repository tree.
pub trait DirectoryChecker {
    /// Returns true if the glob path expression matches at least one file or
    /// directory in the repository.
    fn glob_has_matches(&self, path_expression: &str) -> bool;

    /// Returns true if the non-glob path names an existing file or directory.
    fn path_exists(&self, path: &str) -> bool;
}

/// Answers membership questions about teams and users.
pub trait OwnerData {
    /// Returns true if the team (without the `Azure/` prefix) has write access.
    fn is_write_team(&self, team: &str) -> bool;

    /// Returns true if the user has write access to the repository.
    fn is_write_user(&self, user: &str) -> bool;

    /// Returns true if the user is a public member of the Azure organization.
    fn is_public_member(&self, user: &str) -> bool;
}

/// Answers existence questions about repository labels.
pub trait RepoLabelData {
    /// Returns true if the label exists on the repository. Case-insensitive.
    fn label_exists(&self, label: &str) -> bool;

    /// Returns true if label data was loaded at all.
    fn has_labels(&self) -> bool;
}
