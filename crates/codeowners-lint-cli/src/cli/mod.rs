//! Command-line interface definition.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Lint the metadata blocks of an Azure SDK CODEOWNERS file.
#[derive(Debug, Parser)]
#[command(name = "codeowners-linter", version, about)]
pub struct Args {
    /// The root of the repository to be scanned.
    #[arg(long, env = "CODEOWNERS_REPO_ROOT")]
    pub repo_root: PathBuf,

    /// Path to the CODEOWNERS file. Defaults to .github/CODEOWNERS under the
    /// repository root.
    #[arg(long)]
    pub codeowners: Option<PathBuf>,

    /// Path to the owner data snapshot (teams, users, org visibility) as
    /// JSON. Required for full linting; omit together with --label-data to
    /// lint block structure only.
    #[arg(long, env = "CODEOWNERS_OWNER_DATA", requires = "label_data")]
    pub owner_data: Option<PathBuf>,

    /// Path to the repository label snapshot as JSON.
    #[arg(long, env = "CODEOWNERS_LABEL_DATA", requires = "owner_data")]
    pub label_data: Option<PathBuf>,

    /// Only output errors that don't exist in the baseline file next to the
    /// CODEOWNERS file.
    #[arg(long, visible_alias = "fbl", conflicts_with = "generate_baseline")]
    pub filter_baseline: bool,

    /// Generate the baseline error file from this run's errors.
    #[arg(long, visible_alias = "gbl")]
    pub generate_baseline: bool,

    /// Output errors as JSON instead of human-readable text.
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_invocation_parses() {
        let args = Args::try_parse_from(["codeowners-linter", "--repo-root", "/repo"]).unwrap();
        assert_eq!(args.repo_root, PathBuf::from("/repo"));
        assert!(args.codeowners.is_none());
        assert!(!args.filter_baseline);
        assert!(!args.generate_baseline);
    }

    #[test]
    fn baseline_flags_conflict() {
        let result = Args::try_parse_from([
            "codeowners-linter",
            "--repo-root",
            "/repo",
            "--filter-baseline",
            "--generate-baseline",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn baseline_aliases_work() {
        let args =
            Args::try_parse_from(["codeowners-linter", "--repo-root", "/repo", "--fbl"]).unwrap();
        assert!(args.filter_baseline);
    }

    #[test]
    fn snapshot_paths_require_each_other() {
        let result = Args::try_parse_from([
            "codeowners-linter",
            "--repo-root",
            "/repo",
            "--owner-data",
            "/owners.json",
        ]);
        assert!(result.is_err());
    }
}
