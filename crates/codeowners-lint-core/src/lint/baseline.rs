//! Baseline filtering for known, not-yet-fixed errors.
//!
//! Repositories with a backlog of CODEOWNERS problems generate a baseline
//! once and filter subsequent lint runs through it, so only new problems
//! fail the build.

use super::error::BaseError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to load or save a baseline file.
#[derive(Debug, Error)]
pub enum BaselineError {
    #[error("failed to read or write baseline file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse baseline file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The set of error messages a repository has accepted as known.
///
/// Only the message strings are stored, not line numbers: lines shift every
/// time the file is edited, the messages identify the actual problems.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Baseline {
    messages: HashSet<String>,
}

impl Baseline {
    /// Creates an empty baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a baseline from the errors of a lint run.
    pub fn from_errors(errors: &[BaseError]) -> Self {
        let mut messages = HashSet::new();
        for error in errors {
            for message in error.messages() {
                messages.insert(message.clone());
            }
        }
        info!("Generated baseline with {} message(s)", messages.len());
        Self { messages }
    }

    /// Loads a baseline from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BaselineError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Saves the baseline to a JSON file, replacing any existing one.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BaselineError> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        Ok(())
    }

    /// True if the message is in the baseline.
    pub fn contains(&self, message: &str) -> bool {
        self.messages.contains(message)
    }

    /// Number of messages in the baseline.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if the baseline holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes baselined messages from each error, dropping errors that are
    /// left with no messages at all.
    pub fn filter(&self, errors: Vec<BaseError>) -> Vec<BaseError> {
        let before = errors.len();
        let filtered: Vec<BaseError> = errors
            .into_iter()
            .filter_map(|error| self.filter_error(error))
            .collect();
        debug!(
            "Baseline filtering kept {} of {} error(s)",
            filtered.len(),
            before
        );
        filtered
    }

    fn filter_error(&self, error: BaseError) -> Option<BaseError> {
        match error {
            BaseError::SingleLine(mut single) => {
                single.errors.retain(|message| !self.contains(message));
                (!single.errors.is_empty()).then_some(BaseError::SingleLine(single))
            }
            BaseError::Block(mut block) => {
                block.errors.retain(|message| !self.contains(message));
                (!block.errors.is_empty()).then_some(BaseError::Block(block))
            }
        }
    }
}
