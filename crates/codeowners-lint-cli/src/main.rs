//! CODEOWNERS Linter CLI
//!
//! A command-line tool for linting Azure SDK CODEOWNERS metadata blocks.

use clap::Parser;
use std::io::{self, IsTerminal};
use std::process::ExitCode as StdExitCode;
use tracing::{Level, debug, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, write_json};
use codeowners_lint_core::lint::sort_errors;
use codeowners_lint_core::providers::{
    OwnerSnapshot, RepoDirectory, RepoLabelData, RepoLabelSnapshot,
};
use codeowners_lint_core::{Baseline, LinterContext, lint_blocks, lint_file, load_file_as_lines};

fn main() -> StdExitCode {
    let args = Args::parse();

    init_tracing(args.verbose, args.json);

    let exit_code = run(args);
    StdExitCode::from(exit_code as u8)
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the linter with the given arguments.
fn run(args: Args) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    // Each stream decides for itself; stdout may be piped while stderr is
    // still a terminal, and vice versa.
    let stdout_colors = !args.json && io::stdout().is_terminal();
    let stderr_colors = !args.json && io::stderr().is_terminal();

    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    debug!("Validated configuration: {:?}", config);
    info!("Repository root: {}", config.repo_root.display());
    info!("CODEOWNERS file: {}", config.codeowners_path.display());

    let lines = match load_file_as_lines(&config.codeowners_path) {
        Ok(lines) => lines,
        Err(e) => {
            let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&format!(
                "failed to read CODEOWNERS file '{}': {}",
                config.codeowners_path.display(),
                e
            ));
            return ExitCode::StartupFailure;
        }
    };

    let lint_result = if let (Some(owner_path), Some(label_path)) =
        (&config.owner_data, &config.label_data)
    {
        let owners = match OwnerSnapshot::from_file(owner_path) {
            Ok(owners) => owners,
            Err(e) => {
                let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&format!(
                    "failed to load owner data '{}': {}",
                    owner_path.display(),
                    e
                ));
                return ExitCode::StartupFailure;
            }
        };
        let labels = match RepoLabelSnapshot::from_file(label_path) {
            Ok(labels) => labels,
            Err(e) => {
                let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&format!(
                    "failed to load label data '{}': {}",
                    label_path.display(),
                    e
                ));
                return ExitCode::StartupFailure;
            }
        };
        if !labels.has_labels() {
            let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&format!(
                "the label data '{}' holds no labels, should the linter be running in this repository?",
                label_path.display()
            ));
            return ExitCode::StartupFailure;
        }

        info!("Running full lint with owner and label verification");
        let directory = RepoDirectory::new(&config.repo_root);
        let ctx = LinterContext::new(&directory, &owners, &labels);
        lint_file(&ctx, &lines)
    } else {
        info!("No data snapshots supplied, linting block structure only");
        lint_blocks(&lines)
    };

    let mut errors = match lint_result {
        Ok(errors) => errors,
        Err(e) => {
            // The moniker table and the file have diverged; nothing else in
            // the run can be trusted.
            let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&e.to_string());
            return ExitCode::StartupFailure;
        }
    };

    if config.generate_baseline {
        let baseline = Baseline::from_errors(&errors);
        if let Err(e) = baseline.save(&config.baseline_path) {
            let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(&format!(
                "failed to write baseline file '{}': {}",
                config.baseline_path.display(),
                e
            ));
            return ExitCode::StartupFailure;
        }
        info!(
            "Wrote baseline with {} message(s) to {}",
            baseline.len(),
            config.baseline_path.display()
        );
    }

    if config.filter_baseline {
        if config.baseline_path.is_file() {
            if errors.is_empty() {
                warn!(
                    "There are no CODEOWNERS errors but a baseline file {} exists for filtering. \
                     If all errors have been fixed it should be deleted.",
                    config.baseline_path.display()
                );
            } else {
                match Baseline::load(&config.baseline_path) {
                    Ok(baseline) => {
                        errors = baseline.filter(errors);
                        sort_errors(&mut errors);
                    }
                    Err(e) => {
                        let _ = HumanOutput::new(&mut stderr, stderr_colors).write_startup_error(
                            &format!(
                                "failed to load baseline file '{}': {}",
                                config.baseline_path.display(),
                                e
                            ),
                        );
                        return ExitCode::StartupFailure;
                    }
                }
            }
        } else {
            warn!(
                "The baseline file {} does not exist, no filtering will be done.",
                config.baseline_path.display()
            );
        }
    }

    let write_result = if config.json_output {
        write_json(&mut stdout, &errors)
    } else {
        HumanOutput::new(&mut stdout, stdout_colors).write_errors(&errors)
    };
    if write_result.is_err() {
        return ExitCode::StartupFailure;
    }

    if errors.is_empty() {
        ExitCode::Success
    } else {
        ExitCode::LintErrors
    }
}
