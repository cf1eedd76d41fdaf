//! Line-level token parsers for CODEOWNERS files.
//!
//! This module contains nom-based parsers for the tokens the linter cares
//! about: source path expressions, owner tokens, and label payloads.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::rest,
};

use super::moniker::Moniker;

/// Characters that can appear in a path or owner token.
fn is_token_char(c: char) -> bool {
    !c.is_whitespace()
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Checks if a line is a comment line (first non-whitespace character is `#`).
pub fn is_comment_line(line: &str) -> bool {
    parse_comment_line(line).is_ok()
}

/// Checks if a line is a source path/owner line.
///
/// Any line that is neither blank nor a comment is a source path/owner line,
/// whether or not owners follow the path.
pub fn is_source_path_owner_line(line: &str) -> bool {
    !is_blank_line(line) && !is_comment_line(line)
}

/// Checks if a line is a moniker line.
///
/// An unknown-moniker-shaped line still counts so that block segmentation
/// keeps it inside the block; verification surfaces the fatal error.
pub fn is_moniker_line(line: &str) -> bool {
    !matches!(Moniker::parse_line(line), Ok(None))
}

/// Checks if a line starts or continues a block.
pub fn is_moniker_or_source_line(line: &str) -> bool {
    is_moniker_line(line) || is_source_path_owner_line(line)
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (space0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Parses the source path expression from a source path/owner line.
///
/// The path is the first whitespace-delimited token on the line.
pub fn parse_source_path(line: &str) -> Option<&str> {
    fn path_token(input: &str) -> IResult<&str, &str> {
        (space0, take_while1(is_token_char))
            .map(|(_, token)| token)
            .parse(input)
    }
    path_token(line).ok().map(|(_, path)| path)
}

/// Parses the owner tokens from a line, stripping the leading `@`.
///
/// Works for both source path/owner lines and owner-carrying moniker lines:
/// owners are exactly the whitespace-delimited tokens starting with `@`. The
/// linter does not expand teams, so `@Azure/team` is returned as one token
/// `Azure/team`.
pub fn parse_owners(line: &str) -> Vec<&str> {
    line.split_whitespace()
        .filter_map(|token| token.strip_prefix('@'))
        .filter(|owner| !owner.is_empty())
        .collect()
}

/// Parses the label payload of a `PRLabel` or `ServiceLabel` moniker line.
///
/// Two syntaxes exist. The old syntax prefixes each label with `%`
/// (`# ServiceLabel: %Storage %Service Attention`); labels are split on the
/// `%` separator. The new syntax has no `%` and treats everything after the
/// `:` as a single label (`# PRLabel: Storage`).
pub fn parse_labels(line: &str) -> Vec<String> {
    let Some((_, payload)) = line.split_once(':') else {
        return Vec::new();
    };
    let payload = payload.trim();
    if payload.is_empty() {
        return Vec::new();
    }
    if payload.contains('%') {
        payload
            .split('%')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        vec![payload.to_string()]
    }
}
