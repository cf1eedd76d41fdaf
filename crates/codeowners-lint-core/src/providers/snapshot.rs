//! In-memory snapshots of GitHub team, user, and label data.
//!
//! The Azure SDK pipelines refresh these snapshots out of band; the linter
//! only ever reads them. Both snapshots deserialize from JSON files and offer
//! builder methods so tests can assemble small fixtures inline.

use super::{OwnerData, RepoLabelData};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to load a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse snapshot file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Teams with write access, users with write access, and public members of
/// the Azure organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OwnerSnapshot {
    #[serde(default)]
    write_teams: HashSet<String>,
    #[serde(default)]
    write_users: HashSet<String>,
    #[serde(default)]
    public_members: HashSet<String>,
}

impl OwnerSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        debug!("Loading owner snapshot from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Adds a team with write access.
    pub fn with_write_team(mut self, team: impl Into<String>) -> Self {
        self.write_teams.insert(team.into());
        self
    }

    /// Adds a user with write access.
    pub fn with_write_user(mut self, user: impl Into<String>) -> Self {
        self.write_users.insert(user.into());
        self
    }

    /// Adds a public member of the Azure organization.
    pub fn with_public_member(mut self, user: impl Into<String>) -> Self {
        self.public_members.insert(user.into());
        self
    }
}

impl OwnerData for OwnerSnapshot {
    fn is_write_team(&self, team: &str) -> bool {
        self.write_teams.contains(team)
    }

    fn is_write_user(&self, user: &str) -> bool {
        self.write_users.contains(user)
    }

    fn is_public_member(&self, user: &str) -> bool {
        self.public_members.contains(user)
    }
}

/// The set of labels defined on the repository.
///
/// Lookups are case-insensitive: labels are normalized to lowercase when the
/// snapshot is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawLabels")]
pub struct RepoLabelSnapshot {
    labels: HashSet<String>,
}

#[derive(Deserialize)]
struct RawLabels {
    #[serde(default)]
    labels: Vec<String>,
}

impl From<RawLabels> for RepoLabelSnapshot {
    fn from(raw: RawLabels) -> Self {
        let mut snapshot = Self::default();
        for label in raw.labels {
            snapshot.labels.insert(label.to_lowercase());
        }
        snapshot
    }
}

impl RepoLabelSnapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a snapshot from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        debug!("Loading label snapshot from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Adds a label to the snapshot.
    pub fn with_label(mut self, label: impl AsRef<str>) -> Self {
        self.labels.insert(label.as_ref().to_lowercase());
        self
    }

    /// Number of labels in the snapshot.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if the snapshot holds no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl RepoLabelData for RepoLabelSnapshot {
    fn label_exists(&self, label: &str) -> bool {
        self.labels.contains(&label.to_lowercase())
    }

    fn has_labels(&self) -> bool {
        !self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn owner_lookups() {
        let owners = OwnerSnapshot::new()
            .with_write_team("fakeTeam1")
            .with_write_user("fakeOwner1")
            .with_public_member("fakeOwner1");

        assert!(owners.is_write_team("fakeTeam1"));
        assert!(!owners.is_write_team("fakeTeam2"));
        assert!(owners.is_write_user("fakeOwner1"));
        assert!(owners.is_public_member("fakeOwner1"));
        assert!(!owners.is_public_member("fakeOwner2"));
    }

    #[test]
    fn label_lookup_is_case_insensitive() {
        let labels = RepoLabelSnapshot::new().with_label("Service Bus");
        assert!(labels.label_exists("Service Bus"));
        assert!(labels.label_exists("service bus"));
        assert!(labels.label_exists("SERVICE BUS"));
        assert!(!labels.label_exists("Storage"));
    }

    #[test]
    fn empty_label_snapshot_has_no_labels() {
        let labels = RepoLabelSnapshot::new();
        assert!(!labels.has_labels());
        assert!(labels.is_empty());
    }

    #[test]
    fn owner_snapshot_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("owners.json");
        let mut file = File::create(&path).unwrap();
        write!(
            file,
            r#"{{"write_teams": ["fakeTeam1"], "write_users": ["fakeOwner1"], "public_members": ["fakeOwner1"]}}"#
        )
        .unwrap();

        let owners = OwnerSnapshot::from_file(&path).unwrap();
        assert!(owners.is_write_team("fakeTeam1"));
        assert!(owners.is_write_user("fakeOwner1"));
    }

    #[test]
    fn label_snapshot_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("labels.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"labels": ["Storage", "Service Bus"]}}"#).unwrap();

        let labels = RepoLabelSnapshot::from_file(&path).unwrap();
        assert_eq!(labels.len(), 2);
        assert!(labels.label_exists("storage"));
    }

    #[test]
    fn missing_snapshot_file_is_an_io_error() {
        let err = OwnerSnapshot::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }
}
