//! Validated runtime configuration.

use super::Args;
use std::path::PathBuf;
use thiserror::Error;

/// File name of the baseline, kept next to the CODEOWNERS file.
pub const BASELINE_FILE_NAME: &str = "CODEOWNERS_baseline_errors.json";

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// The file linted clean (or clean after baseline filtering).
    Success = 0,
    /// Lint errors were found.
    LintErrors = 1,
    /// Bad arguments, unreadable inputs, or an unrecognized moniker.
    StartupFailure = 2,
}

/// A configuration problem detected before linting starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "the repository root '{0}' is not a valid directory, \
         ensure --repo-root points at the root of the repository"
    )]
    RepoRootNotADirectory(PathBuf),
    #[error(
        "CODEOWNERS file '{0}' does not exist, ensure --repo-root points at \
         the root of the repository and the CODEOWNERS file exists in the \
         .github subdirectory"
    )]
    CodeownersFileMissing(PathBuf),
}

/// Arguments after path resolution and existence checks.
#[derive(Debug)]
pub struct ValidatedConfig {
    pub repo_root: PathBuf,
    pub codeowners_path: PathBuf,
    pub baseline_path: PathBuf,
    pub owner_data: Option<PathBuf>,
    pub label_data: Option<PathBuf>,
    pub filter_baseline: bool,
    pub generate_baseline: bool,
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Validates the parsed arguments. The baseline flags and the
    /// owner/label pairing are already enforced by clap.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        if !args.repo_root.is_dir() {
            return Err(ConfigError::RepoRootNotADirectory(args.repo_root.clone()));
        }

        let codeowners_path = args
            .codeowners
            .clone()
            .unwrap_or_else(|| args.repo_root.join(".github").join("CODEOWNERS"));
        if !codeowners_path.is_file() {
            return Err(ConfigError::CodeownersFileMissing(codeowners_path));
        }

        // The baseline always lives beside the CODEOWNERS file.
        let baseline_path = codeowners_path
            .parent()
            .map(|dir| dir.join(BASELINE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(BASELINE_FILE_NAME));

        Ok(Self {
            repo_root: args.repo_root.clone(),
            codeowners_path,
            baseline_path,
            owner_data: args.owner_data.clone(),
            label_data: args.label_data.clone(),
            filter_baseline: args.filter_baseline,
            generate_baseline: args.generate_baseline,
            json_output: args.json,
        })
    }

}
