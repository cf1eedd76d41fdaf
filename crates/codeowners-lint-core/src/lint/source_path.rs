//! Source path expression verification.
//!
//! CODEOWNERS path expressions allow only a subset of gitignore glob syntax,
//! and every expression must actually match something in the repository.

use super::messages;
use crate::parse::parse_source_path;
use crate::providers::DirectoryChecker;
use log::trace;

/// Returns true if the path uses glob syntax. `*` is the only wildcard the
/// supported syntax has.
pub fn is_glob_path(path: &str) -> bool {
    path.contains('*')
}

/// Verifies the source path expression of a source path/owner line.
///
/// Glob expressions are checked structurally first and only matched against
/// the repository when well formed; plain paths are checked for existence.
pub(crate) fn verify_source_path_entry(
    directory: &dyn DirectoryChecker,
    line: &str,
    error_strings: &mut Vec<String>,
) {
    let Some(path) = parse_source_path(line) else {
        return;
    };
    trace!("Verifying source path {:?}", path);

    if is_glob_path(path) {
        if is_valid_path_expression(path, error_strings) && !directory.glob_has_matches(path) {
            error_strings.push(format!(
                "{path}{}",
                messages::GLOB_HAS_NO_MATCHES_IN_REPO_PARTIAL
            ));
        }
    } else if !directory.path_exists(path) {
        error_strings.push(format!(
            "{path}{}",
            messages::PATH_OR_FILE_NOT_EXIST_IN_REPO_PARTIAL
        ));
    }
}

/// Checks a path expression against the syntax rules for CODEOWNERS globs.
///
/// Character errors can stack, so every one is collected; the shape errors
/// are mutually exclusive suffix checks.
pub fn is_valid_path_expression(path: &str, error_strings: &mut Vec<String>) -> bool {
    let mut valid = true;

    if path.contains("\\#") {
        error_strings.push(format!("{path}{}", messages::CONTAINS_ESCAPED_POUND_PARTIAL));
        valid = false;
    }
    if path.contains('!') {
        error_strings.push(format!("{path}{}", messages::CONTAINS_NEGATION_PARTIAL));
        valid = false;
    }
    if path.contains('[') || path.contains(']') {
        error_strings.push(format!("{path}{}", messages::CONTAINS_RANGE_PARTIAL));
        valid = false;
    }
    if path.contains('?') {
        error_strings.push(format!("{path}{}", messages::CONTAINS_QUESTION_MARK_PARTIAL));
        valid = false;
    }

    if path == "/" {
        error_strings.push(messages::PATH_IS_SINGLE_SLASH.to_string());
        valid = false;
    } else if path == "/**/" {
        error_strings.push(messages::PATH_IS_SINGLE_SLASH_TWO_ASTERISKS_SINGLE_SLASH.to_string());
        valid = false;
    } else if !path.starts_with('/') {
        error_strings.push(format!("{path}{}", messages::MUST_START_WITH_A_SLASH_PARTIAL));
        valid = false;
    }

    // The suffix checks only apply to globs, and "/**" on its own is the one
    // expression allowed to end that way.
    if is_glob_path(path) && path != "/**" {
        if path.ends_with("/**") {
            // "/foo/**" is equivalent to "/foo/" and the matcher rejects it.
            error_strings.push(format!(
                "{path}{}",
                messages::GLOB_CANNOT_END_WITH_TWO_ASTERISKS_PARTIAL
            ));
            valid = false;
        } else if path.ends_with("/**/") && path != "/**/" {
            error_strings.push(format!(
                "{path}{}",
                messages::GLOB_CANNOT_END_WITH_TWO_ASTERISKS_SLASH_PARTIAL
            ));
            valid = false;
        } else if path.ends_with('*') && !path.ends_with("/*") {
            // "foo*" doesn't work with the matcher; "/*" (everything in the
            // directory) and file type wildcards like "*.md" are fine.
            error_strings.push(format!(
                "{path}{}",
                messages::GLOB_CANNOT_END_IN_WILDCARD_PARTIAL
            ));
            valid = false;
        }
    }

    valid
}
