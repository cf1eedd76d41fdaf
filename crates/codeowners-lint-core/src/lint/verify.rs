//! Block and single-line verification.
//!
//! Definitions:
//!     Source path/owner line: any line that is not a comment and not blank.
//!     Metadata block: one or more moniker lines which, depending on the
//!     monikers, may end with a source path/owner line.

use super::error::{BaseError, BlockFormattingError, SingleLineError, UnknownMonikerError};
use super::labels::verify_labels;
use super::messages;
use super::owners::verify_owners;
use super::source_path::verify_source_path_entry;
use super::LinterContext;
use crate::parse::{Moniker, is_source_path_owner_line};
use log::debug;

/// Verifies the contents of a single line, called as part of block
/// processing.
///
/// `expect_owners_if_moniker` is false when the enclosing block ends with a
/// source path/owner line, which then supplies the owners for the block's
/// owner monikers.
pub(crate) fn verify_single_line(
    ctx: &LinterContext<'_>,
    errors: &mut Vec<BaseError>,
    line_number: usize,
    line: &str,
    is_source_line: bool,
    expect_owners_if_moniker: bool,
    moniker: Option<Moniker>,
) {
    let mut error_strings = Vec::new();
    if is_source_line {
        verify_source_path_entry(ctx.directory, line, &mut error_strings);
        verify_owners(ctx.owners, line, true, &mut error_strings);
    } else if let Some(moniker) = moniker {
        if moniker.carries_labels() {
            verify_labels(ctx.labels, line, moniker, &mut error_strings);
        } else {
            verify_owners(ctx.owners, line, expect_owners_if_moniker, &mut error_strings);
        }
    }

    if !error_strings.is_empty() {
        errors.push(BaseError::SingleLine(SingleLineError::new(
            line_number,
            line,
            error_strings,
        )));
    }
}

/// Tracks which monikers a block contains.
#[derive(Debug, Default)]
struct MonikerFlags {
    azure_sdk_owners: bool,
    missing_folder: bool,
    pr_label: bool,
    service_label: bool,
    service_owners: bool,
}

impl MonikerFlags {
    /// Records the moniker, reporting a duplicate if it was already present.
    fn record(&mut self, moniker: Moniker, block_error_strings: &mut Vec<String>) {
        let flag = match moniker {
            Moniker::AzureSdkOwners => &mut self.azure_sdk_owners,
            Moniker::MissingFolder => &mut self.missing_folder,
            Moniker::PRLabel => &mut self.pr_label,
            Moniker::ServiceLabel => &mut self.service_label,
            Moniker::ServiceOwners => &mut self.service_owners,
        };
        if *flag {
            block_error_strings.push(format!(
                "{moniker}{}",
                messages::DUPLICATE_MONIKER_IN_BLOCK_PARTIAL
            ));
        }
        *flag = true;
    }
}

/// Verifies the formatting of one block.
///
/// `start` and `end` are 0-based inclusive indices; reported line numbers are
/// 1-based. When `ctx` is `None` single-line verification is skipped and only
/// the block's shape is checked, which is what parsing-oriented callers need.
pub(crate) fn verify_block(
    ctx: Option<&LinterContext<'_>>,
    errors: &mut Vec<BaseError>,
    start: usize,
    end: usize,
    lines: &[String],
) -> Result<(), UnknownMonikerError> {
    let mut block_error_strings = Vec::new();
    let ends_with_source_owner_line = is_source_path_owner_line(&lines[end]);
    let mut flags = MonikerFlags::default();

    for (index, line) in lines.iter().enumerate().take(end + 1).skip(start) {
        let line_number = index + 1;
        if is_source_path_owner_line(line) {
            if let Some(ctx) = ctx {
                verify_single_line(ctx, errors, line_number, line, true, false, None);
            }
            continue;
        }

        let moniker = match Moniker::parse_line(line) {
            Ok(Some(moniker)) => moniker,
            // A comment line inside the block, skip it
            Ok(None) => continue,
            Err(unknown) => {
                return Err(UnknownMonikerError {
                    line_number,
                    keyword: unknown.keyword,
                });
            }
        };

        flags.record(moniker, &mut block_error_strings);
        if let Some(ctx) = ctx {
            verify_single_line(
                ctx,
                errors,
                line_number,
                line,
                false,
                // Owners come from the source line when the block ends in one
                !ends_with_source_owner_line,
                Some(moniker),
            );
        }
    }

    // A block that is a single source path/owner line can't have block errors.
    if start == end && ends_with_source_owner_line {
        return Ok(());
    }

    // AzureSdkOwners are associated with a ServiceLabel
    if flags.azure_sdk_owners && !flags.service_label {
        block_error_strings.push(messages::AZURE_SDK_OWNERS_MUST_BE_WITH_SERVICE_LABEL.to_string());
    }

    if flags.service_owners && !flags.service_label {
        block_error_strings.push(messages::SERVICE_OWNERS_MUST_BE_WITH_SERVICE_LABEL.to_string());
    }

    if flags.pr_label && !ends_with_source_owner_line {
        block_error_strings.push(format!(
            "{}{}",
            Moniker::PRLabel,
            messages::NEEDS_TO_END_WITH_SOURCE_OWNER_PARTIAL
        ));
    }

    // A ServiceLabel needs exactly one owner source: ServiceOwners,
    // /<NotInRepo>/, or the source path/owner line that ends the block.
    if flags.service_label {
        if !ends_with_source_owner_line && !flags.service_owners && !flags.missing_folder {
            block_error_strings.push(messages::SERVICE_LABEL_NEEDS_OWNERS.to_string());
        } else if ends_with_source_owner_line && (flags.service_owners || flags.missing_folder) {
            block_error_strings.push(messages::SERVICE_LABEL_HAS_TOO_MANY_OWNERS.to_string());
        } else if flags.service_owners && flags.missing_folder {
            block_error_strings
                .push(messages::SERVICE_LABEL_HAS_TOO_MANY_OWNER_MONIKERS.to_string());
        }
    }

    if !block_error_strings.is_empty() {
        debug!(
            "Block at lines {}..={} has {} formatting error(s)",
            start + 1,
            end + 1,
            block_error_strings.len()
        );
        errors.push(BaseError::Block(BlockFormattingError::new(
            start + 1,
            end + 1,
            lines[start..=end].to_vec(),
            block_error_strings,
        )));
    }
    Ok(())
}
