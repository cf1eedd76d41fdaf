//! The lint engine: single-line, block, and whole-file verification.

mod baseline;
mod error;
mod labels;
pub mod messages;
mod owners;
mod source_path;
mod verify;

pub use baseline::{Baseline, BaselineError};
pub use error::{BaseError, BlockFormattingError, SingleLineError, UnknownMonikerError};
pub use labels::SERVICE_ATTENTION_LABEL;
pub use owners::AZURE_ORG;
pub use source_path::{is_glob_path, is_valid_path_expression};

use crate::parse::blocks;
use crate::providers::{DirectoryChecker, OwnerData, RepoLabelData};
use log::{debug, info};

/// The read-only lookup data a full lint needs.
///
/// The context borrows its providers; callers construct them once and can
/// lint any number of files against the same data.
pub struct LinterContext<'a> {
    pub directory: &'a dyn DirectoryChecker,
    pub owners: &'a dyn OwnerData,
    pub labels: &'a dyn RepoLabelData,
}

impl<'a> LinterContext<'a> {
    pub fn new(
        directory: &'a dyn DirectoryChecker,
        owners: &'a dyn OwnerData,
        labels: &'a dyn RepoLabelData,
    ) -> Self {
        Self {
            directory,
            owners,
            labels,
        }
    }
}

/// Lints a CODEOWNERS file, block by block.
///
/// A block is either a single source path/owner line, or one or more moniker
/// lines that end in a source path/owner line or a blank line depending on
/// the monikers. An empty result means the file is fully valid. The only
/// error that aborts the scan is an unrecognized moniker.
pub fn lint_file(
    ctx: &LinterContext<'_>,
    lines: &[String],
) -> Result<Vec<BaseError>, UnknownMonikerError> {
    lint_lines(Some(ctx), lines)
}

/// Lints only the block structure of a CODEOWNERS file.
///
/// Skips single-line verification, so no providers are needed. This is what
/// parsing-oriented callers use when they only need to know the blocks are
/// well formed.
pub fn lint_blocks(lines: &[String]) -> Result<Vec<BaseError>, UnknownMonikerError> {
    lint_lines(None, lines)
}

fn lint_lines(
    ctx: Option<&LinterContext<'_>>,
    lines: &[String],
) -> Result<Vec<BaseError>, UnknownMonikerError> {
    let mut errors = Vec::new();
    let found_blocks = blocks(lines);
    debug!("Linting {} block(s)", found_blocks.len());
    for block in found_blocks {
        verify::verify_block(ctx, &mut errors, block.start, block.end, lines)?;
    }
    sort_errors(&mut errors);
    info!("Lint finished with {} error(s)", errors.len());
    Ok(errors)
}

/// Sorts errors ascending by line number, block errors before single-line
/// errors at the same line.
pub fn sort_errors(errors: &mut [BaseError]) {
    errors.sort_by(|a, b| {
        a.line_number()
            .cmp(&b.line_number())
            .then_with(|| b.is_block().cmp(&a.is_block()))
    });
}

/// True if every line of the file is blank, a comment, a well-formed block
/// line, or otherwise ordinary CODEOWNERS content. Exposed for tests and
/// callers that only care about validity.
pub fn file_is_valid(ctx: &LinterContext<'_>, lines: &[String]) -> bool {
    matches!(lint_file(ctx, lines), Ok(errors) if errors.is_empty())
}
